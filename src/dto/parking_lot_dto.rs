use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::ParkingLot;
use crate::utils::validation::validate_not_blank;

// Request to create a parking lot
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateParkingLotRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub name: String,

    #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
    pub floor: String,
}

// Request to rename or move a parking lot
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateParkingLotRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub name: String,

    #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
    pub floor: String,
}

// Parking lot detail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParkingLotResponse {
    pub id: i64,
    pub name: String,
    pub floor: String,
    pub is_occupied: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&ParkingLot> for ParkingLotResponse {
    fn from(lot: &ParkingLot) -> Self {
        Self {
            id: lot.id,
            name: lot.name.clone(),
            floor: lot.floor.clone(),
            is_occupied: lot.is_occupied,
            created_at: lot.created_at,
            updated_at: lot.updated_at,
        }
    }
}
