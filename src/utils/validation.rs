//! Validation helpers
//!
//! Thin wrappers around `validator` used by the controllers before any
//! request reaches the storage layer.

use validator::{Validate, ValidationError};

use crate::utils::errors::AppError;

/// Run the derived validation rules of a request.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request.validate().map_err(AppError::Validation)
}

/// Reject strings that are empty once trimmed.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}
