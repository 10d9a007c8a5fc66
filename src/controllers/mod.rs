//! Controllers
//!
//! Entry points used by the routes: validate the bound request, call the
//! repositories or services and shape the response.

pub mod parking_controller;
pub mod parking_lot_controller;
pub mod vehicle_controller;

pub use parking_controller::ParkingController;
pub use parking_lot_controller::ParkingLotController;
pub use vehicle_controller::VehicleController;
