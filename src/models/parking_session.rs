//! Parking session model
//!
//! Ledger entries. A check-out never edits the check-in row: it appends a
//! new row with `status = CheckedOut`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identified;
use crate::database::Table;

pub const PARKING_SESSION_TABLE: &str = "parking_vehicle_status";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ParkingStatus {
    CheckedIn,
    CheckedOut,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSession {
    pub id: i64,
    pub plate_number: String,
    pub vehicle_type: String,
    pub color: String,
    pub check_in_at: DateTime<Utc>,
    #[serde(default)]
    pub check_out_at: Option<DateTime<Utc>>,
    pub status: ParkingStatus,
    #[serde(default)]
    pub fee: i64,
    #[serde(default)]
    pub lot_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ParkingSession {
    pub fn is_parked(&self) -> bool {
        self.status == ParkingStatus::CheckedIn
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl Identified for ParkingSession {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Table for ParkingSession {
    const NAME: &'static str = PARKING_SESSION_TABLE;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_row_without_optional_fields() {
        let raw = r#"{
            "id": 1,
            "plateNumber": "B-1",
            "vehicleType": "car",
            "color": "red",
            "checkInAt": "2024-01-01T08:00:00Z",
            "status": "CheckedIn",
            "createdAt": "2024-01-01T08:00:00Z",
            "updatedAt": "2024-01-01T08:00:00Z"
        }"#;

        let session: ParkingSession = serde_json::from_str(raw).unwrap();
        assert!(session.is_parked());
        assert_eq!(session.fee, 0);
        assert!(session.check_out_at.is_none());
        assert!(!session.is_deleted());
    }
}
