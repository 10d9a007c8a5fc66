//! Utilities
//!
//! Error handling and request validation shared by every layer.

pub mod errors;
pub mod validation;
