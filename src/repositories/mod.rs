//! Repositories
//!
//! Typed access to the tables. A repository always works on the whole
//! collection: load every row, change it in memory, save every row back.

pub mod parking_lot_repository;
pub mod vehicle_repository;

use std::marker::PhantomData;
use std::sync::Arc;

use crate::database::{load_table, save_table, RecordStore, StorageError, Table};
use crate::models::ParkingSession;

pub use parking_lot_repository::ParkingLotRepository;
pub use vehicle_repository::VehicleRepository;

pub type ParkingSessionRepository = TableRepository<ParkingSession>;

pub struct TableRepository<T: Table> {
    store: Arc<dyn RecordStore>,
    _rows: PhantomData<fn() -> T>,
}

impl<T: Table> TableRepository<T> {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            _rows: PhantomData,
        }
    }

    pub fn table(&self) -> &'static str {
        T::NAME
    }

    /// Every row of the table; the table is created empty on first use.
    pub async fn load_all(&self) -> Result<Vec<T>, StorageError> {
        load_table::<T>(self.store.as_ref()).await
    }

    /// Replace the table with `rows`.
    pub async fn save_all(&self, rows: &[T]) -> Result<(), StorageError> {
        save_table(self.store.as_ref(), rows).await
    }
}

impl<T: Table> Clone for TableRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.store.clone())
    }
}
