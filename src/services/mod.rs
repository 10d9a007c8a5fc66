//! Services module
//!
//! Business logic of the parking lifecycle: fee computation, lot
//! allocation, the session ledger and the check-in / check-out
//! orchestration on top of them.

pub mod clock;
pub mod ledger;
pub mod lot_allocator;
pub mod parking_service;
pub mod pricing;
pub mod table_loader;

pub use parking_service::{CheckInReceipt, CheckOutInvoice, ParkingService};
