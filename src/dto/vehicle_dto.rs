use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::VehicleCatalogEntry;
use crate::utils::validation::validate_not_blank;

// Request to register a vehicle type and its tariff
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub name: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
    pub vehicle_type: String,

    #[validate(range(min = 0))]
    pub first_hour_price: i64,

    #[validate(range(min = 0))]
    pub price_per_hour_percent: i64,
}

// Request to replace a vehicle type's tariff
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub name: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
    pub vehicle_type: String,

    #[validate(range(min = 0))]
    pub first_hour_price: i64,

    #[validate(range(min = 0))]
    pub price_per_hour_percent: i64,
}

// Vehicle catalog entry detail
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleResponse {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub first_hour_price: i64,
    pub price_per_hour_percent: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&VehicleCatalogEntry> for VehicleResponse {
    fn from(entry: &VehicleCatalogEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            vehicle_type: entry.vehicle_type.clone(),
            first_hour_price: entry.first_hour_price,
            price_per_hour_percent: entry.price_per_hour_percent,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}
