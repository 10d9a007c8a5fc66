//! Error handling
//!
//! Every error the service can return, with a stable machine-readable code
//! and its conversion into an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::database::StorageError;

/// Stable reason strings shown to clients.
pub mod reasons {
    pub const VEHICLE_ALREADY_PARKED: &str = "This vehicle has already been parked";
    pub const VEHICLE_ALREADY_LEFT: &str = "This vehicle has left the parking lot";
    pub const NO_VEHICLE_PARKED: &str = "There's no vehicle parked with this plate number";
    pub const NO_PARKING_AREA_AVAILABLE: &str = "There's no parking area available";
    pub const VEHICLE_DATA_NOT_FOUND: &str = "Vehicle data not found";
    pub const PARKING_AREA_NOT_FOUND: &str = "Parking area not found";
    pub const PARKING_AREA_OCCUPIED: &str = "This parking area is occupied";
    pub const PARKING_AREA_NAME_TAKEN: &str = "A parking area with this name already exists";
    pub const DATA_NOT_FOUND: &str = "Data not found";
    pub const STORAGE_FAILURE: &str = "An error occurred while accessing storage";
    pub const INVALID_REQUEST: &str = "The provided data is invalid";
}

/// Main application errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("No capacity: {0}")]
    Capacity(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// API error body
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    code: &'static str,
}

impl AppError {
    /// Machine-readable kind of the error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::Conflict(_) => "CONFLICT",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Capacity(_) => "NO_CAPACITY",
            AppError::Storage(_) => "STORAGE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::BadRequest(_) | AppError::Capacity(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Reason string safe to show to a client. Storage and internal
    /// failures never leak their underlying cause.
    pub fn reason(&self) -> String {
        match self {
            AppError::Validation(_) => reasons::INVALID_REQUEST.to_string(),
            AppError::NotFound(msg)
            | AppError::Conflict(msg)
            | AppError::BadRequest(msg)
            | AppError::Capacity(msg) => msg.clone(),
            AppError::Storage(_) => reasons::STORAGE_FAILURE.to_string(),
            AppError::Internal(_) => "An unexpected error occurred".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let details = match &self {
            AppError::Validation(e) => Some(json!(e)),
            _ => None,
        };

        match &self {
            AppError::Storage(e) => error!("Storage error: {}", e),
            AppError::Internal(msg) => error!("Internal error: {}", msg),
            other => warn!("Request rejected ({}): {}", other.code(), other),
        }

        let body = ErrorResponse {
            error: status
                .canonical_reason()
                .unwrap_or("Error")
                .to_string(),
            message: self.reason(),
            details,
            code: self.code(),
        };

        (status, Json(body)).into_response()
    }
}

/// Typed result for fallible operations
pub type AppResult<T> = Result<T, AppError>;

pub fn not_found_error(message: &str) -> AppError {
    AppError::NotFound(message.to_string())
}

pub fn conflict_error(message: &str) -> AppError {
    AppError::Conflict(message.to_string())
}

pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_status_mapping() {
        assert_eq!(not_found_error("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(conflict_error("x").status(), StatusCode::CONFLICT);
        assert_eq!(bad_request_error("x").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Capacity(reasons::NO_PARKING_AREA_AVAILABLE.to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_storage_error_hides_io_message() {
        let err = AppError::from(StorageError::Io {
            table: "parking_lot".to_string(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "/secret/path denied"),
        });

        assert_eq!(err.code(), "STORAGE_ERROR");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.reason(), reasons::STORAGE_FAILURE);
        assert!(!err.reason().contains("/secret/path"));
    }

    #[test]
    fn test_business_reason_is_passed_through() {
        let err = conflict_error(reasons::VEHICLE_ALREADY_PARKED);
        assert_eq!(err.code(), "CONFLICT");
        assert_eq!(err.reason(), reasons::VEHICLE_ALREADY_PARKED);
    }
}
