use crate::models::VehicleCatalogEntry;

use super::TableRepository;

pub type VehicleRepository = TableRepository<VehicleCatalogEntry>;

pub fn position_by_id(entries: &[VehicleCatalogEntry], id: i64) -> Option<usize> {
    entries.iter().position(|entry| entry.id == id)
}

/// Catalog entry used to price a vehicle of `vehicle_type`. When several
/// active entries share a type the most recently stored one wins.
pub fn find_by_type<'a>(
    entries: &'a [VehicleCatalogEntry],
    vehicle_type: &str,
) -> Option<&'a VehicleCatalogEntry> {
    entries
        .iter()
        .rev()
        .find(|entry| !entry.is_deleted() && entry.vehicle_type == vehicle_type)
}

pub fn search_active<'a>(
    entries: &'a [VehicleCatalogEntry],
    search: Option<&str>,
) -> Vec<&'a VehicleCatalogEntry> {
    let needle = search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    entries
        .iter()
        .filter(|entry| !entry.is_deleted())
        .filter(|entry| match &needle {
            Some(needle) => {
                entry.name.to_lowercase().contains(needle)
                    || entry.vehicle_type.to_lowercase().contains(needle)
            }
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(id: i64, vehicle_type: &str, first_hour_price: i64) -> VehicleCatalogEntry {
        let now = Utc::now();
        VehicleCatalogEntry {
            id,
            name: format!("{} tariff", vehicle_type),
            vehicle_type: vehicle_type.to_string(),
            first_hour_price,
            price_per_hour_percent: 50,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_find_by_type_skips_deleted_and_prefers_latest() {
        let mut old = entry(1, "car", 3000);
        old.deleted_at = Some(Utc::now());
        let entries = vec![old, entry(2, "car", 4000), entry(3, "motorcycle", 2000), entry(4, "car", 5000)];

        assert_eq!(find_by_type(&entries, "car").map(|e| e.id), Some(4));
        assert_eq!(find_by_type(&entries, "truck"), None);
    }
}
