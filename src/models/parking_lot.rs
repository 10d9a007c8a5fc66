//! Parking lot model
//!
//! One physical slot of the facility. Occupancy is flipped by check-in and
//! check-out; management operations soft-delete through `deleted_at`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identified;
use crate::database::Table;

pub const PARKING_LOT_TABLE: &str = "parking_lot";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParkingLot {
    pub id: i64,
    pub name: String,
    pub floor: String,
    #[serde(default)]
    pub is_occupied: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ParkingLot {
    pub fn new(id: i64, name: String, floor: String, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name,
            floor,
            is_occupied: false,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Eligible for allocation: free and not soft-deleted.
    pub fn is_available(&self) -> bool {
        !self.is_occupied && !self.is_deleted()
    }
}

impl Identified for ParkingLot {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Table for ParkingLot {
    const NAME: &'static str = PARKING_LOT_TABLE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_field_names() {
        let lot = ParkingLot::new(1, "A-01".to_string(), "1".to_string(), Utc::now());
        let value = serde_json::to_value(&lot).unwrap();

        assert_eq!(value["isOccupied"], false);
        assert!(value["deletedAt"].is_null());
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn test_availability() {
        let mut lot = ParkingLot::new(1, "A-01".to_string(), "1".to_string(), Utc::now());
        assert!(lot.is_available());

        lot.is_occupied = true;
        assert!(!lot.is_available());

        lot.is_occupied = false;
        lot.deleted_at = Some(Utc::now());
        assert!(!lot.is_available());
    }
}
