pub mod parking_dto;
pub mod parking_lot_dto;
pub mod vehicle_dto;

use serde::{Deserialize, Serialize};
use validator::Validate;

// Generic response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message(message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: None,
        }
    }
}

// Search and pagination for list endpoints
#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct ListParams {
    pub search: Option<String>,
    #[validate(range(min = 0))]
    pub limit: Option<i64>,
    #[validate(range(min = 0))]
    pub offset: Option<i64>,
}

impl ListParams {
    /// Apply `offset` then `limit`; a missing or zero limit returns the rest.
    pub fn paginate<T>(&self, rows: Vec<T>) -> Vec<T> {
        let offset = self.offset.unwrap_or(0).max(0) as usize;
        let rows = rows.into_iter().skip(offset);
        match self.limit {
            Some(limit) if limit > 0 => rows.take(limit as usize).collect(),
            _ => rows.collect(),
        }
    }
}
