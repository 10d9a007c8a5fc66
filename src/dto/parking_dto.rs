use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::services::{CheckInReceipt, CheckOutInvoice};
use crate::utils::validation::validate_not_blank;

// Vehicle entering the facility
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckInRequest {
    #[validate(length(min = 1, max = 20), custom = "validate_not_blank")]
    pub plate_number: String,

    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50), custom = "validate_not_blank")]
    pub vehicle_type: String,

    #[validate(length(min = 1, max = 30), custom = "validate_not_blank")]
    pub color: String,
}

// Vehicle leaving the facility
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckOutRequest {
    #[validate(length(min = 1, max = 20), custom = "validate_not_blank")]
    pub plate_number: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckInResponse {
    pub plate_number: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub color: String,
    pub parking_lot: String,
    pub check_in_at: DateTime<Utc>,
}

impl From<CheckInReceipt> for CheckInResponse {
    fn from(receipt: CheckInReceipt) -> Self {
        Self {
            plate_number: receipt.plate_number,
            vehicle_type: receipt.vehicle_type,
            color: receipt.color,
            parking_lot: receipt.lot_name,
            check_in_at: receipt.check_in_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckOutResponse {
    pub plate_number: String,
    pub parking_lot: String,
    pub fee: i64,
    pub parked_hours: i64,
    pub check_in_at: DateTime<Utc>,
    pub check_out_at: DateTime<Utc>,
}

impl From<CheckOutInvoice> for CheckOutResponse {
    fn from(invoice: CheckOutInvoice) -> Self {
        Self {
            plate_number: invoice.plate_number,
            parking_lot: invoice.lot_name,
            fee: invoice.fee,
            parked_hours: invoice.elapsed_hours,
            check_in_at: invoice.check_in_at,
            check_out_at: invoice.check_out_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PlatesByColorQuery {
    #[validate(length(min = 1, max = 30))]
    pub color: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CountByTypeQuery {
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub vehicle_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlatesResponse {
    pub plate_numbers: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleCountResponse {
    pub total: usize,
}
