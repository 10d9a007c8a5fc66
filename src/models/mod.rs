//! System models
//!
//! Records persisted as whole JSON tables. Field names are camelCase on
//! disk.

pub mod parking_lot;
pub mod parking_session;
pub mod vehicle;

pub use parking_lot::ParkingLot;
pub use parking_session::{ParkingSession, ParkingStatus};
pub use vehicle::VehicleCatalogEntry;

/// Rows addressed by a numeric id.
pub trait Identified {
    fn id(&self) -> i64;
}

/// Next free id for a table: one past the largest id in use.
pub fn next_id<T: Identified>(rows: &[T]) -> i64 {
    rows.iter().map(Identified::id).max().unwrap_or(0) + 1
}
