//! Project configuration
//!
//! Environment variables for the HTTP server and the file-backed storage.

pub mod environment;

pub use environment::*;
