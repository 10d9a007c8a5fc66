//! Vehicle catalog model
//!
//! Price list per vehicle type. Pricing looks entries up by `vehicle_type`,
//! never by id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identified;
use crate::database::Table;

pub const VEHICLE_TABLE: &str = "vehicle";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VehicleCatalogEntry {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub first_hour_price: i64,
    pub price_per_hour_percent: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl VehicleCatalogEntry {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl Identified for VehicleCatalogEntry {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Table for VehicleCatalogEntry {
    const NAME: &'static str = VEHICLE_TABLE;
}
