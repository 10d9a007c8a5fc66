//! Shared application state
//!
//! Handed to every handler through axum's `State` extractor.

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::database::{FileRecordStore, RecordStore, TableLocks};
use crate::services::clock::Clock;
use crate::services::ParkingService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub store: Arc<dyn RecordStore>,
    pub locks: TableLocks,
    pub parking: ParkingService,
}

impl AppState {
    pub fn new(config: EnvironmentConfig) -> Self {
        let store: Arc<dyn RecordStore> = Arc::new(FileRecordStore::new(config.storage_path.clone()));
        Self::with_store(config, store)
    }

    pub fn with_store(config: EnvironmentConfig, store: Arc<dyn RecordStore>) -> Self {
        let locks = TableLocks::default();
        let parking = ParkingService::new(store.clone(), locks.clone());
        Self {
            config,
            store,
            locks,
            parking,
        }
    }

    /// Same wiring with an injected time source for the lifecycle.
    pub fn with_clock(
        config: EnvironmentConfig,
        store: Arc<dyn RecordStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let locks = TableLocks::default();
        let parking = ParkingService::with_clock(store.clone(), locks.clone(), clock);
        Self {
            config,
            store,
            locks,
            parking,
        }
    }
}
