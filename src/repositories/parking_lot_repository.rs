use crate::models::ParkingLot;

use super::TableRepository;

pub type ParkingLotRepository = TableRepository<ParkingLot>;

/// Position of the lot with `id`, soft-deleted or not.
pub fn position_by_id(lots: &[ParkingLot], id: i64) -> Option<usize> {
    lots.iter().position(|lot| lot.id == id)
}

/// Position of the live lot named `name` that a parked vehicle holds.
/// Soft-deleted lots never match; an occupied lot wins over a free one.
pub fn position_for_release(lots: &[ParkingLot], name: &str) -> Option<usize> {
    let live = |lot: &ParkingLot| lot.name == name && !lot.is_deleted();
    lots.iter()
        .position(|lot| live(lot) && lot.is_occupied)
        .or_else(|| lots.iter().position(live))
}

/// True if a live lot other than `except_id` already uses `name`.
pub fn name_taken(lots: &[ParkingLot], name: &str, except_id: Option<i64>) -> bool {
    lots.iter().any(|lot| {
        !lot.is_deleted() && lot.name == name && Some(lot.id) != except_id
    })
}

/// Lots visible to listings, filtered by a case-insensitive search over
/// name and floor.
pub fn search_active<'a>(lots: &'a [ParkingLot], search: Option<&str>) -> Vec<&'a ParkingLot> {
    let needle = search
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty());

    lots.iter()
        .filter(|lot| !lot.is_deleted())
        .filter(|lot| match &needle {
            Some(needle) => {
                lot.name.to_lowercase().contains(needle) || lot.floor.to_lowercase().contains(needle)
            }
            None => true,
        })
        .collect()
}
