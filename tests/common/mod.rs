#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use parking_management::database::{
    save_table, FileRecordStore, RecordStore, StorageError, TableLocks,
};
use parking_management::models::{ParkingLot, VehicleCatalogEntry};
use parking_management::services::clock::ManualClock;
use parking_management::services::ParkingService;

/// Storage in a unique temp directory, removed on drop.
pub struct TestStorage {
    pub root: PathBuf,
    pub store: Arc<dyn RecordStore>,
    pub locks: TableLocks,
    pub clock: ManualClock,
}

impl TestStorage {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("parking-test-{}", uuid::Uuid::new_v4()));
        Self {
            store: Arc::new(FileRecordStore::new(root.clone())),
            root,
            locks: TableLocks::new(),
            clock: ManualClock::new(Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()),
        }
    }

    pub fn service(&self) -> ParkingService {
        ParkingService::with_clock(
            self.store.clone(),
            self.locks.clone(),
            Arc::new(self.clock.clone()),
        )
    }

    /// Service over the same directory whose saves to `failing` error out.
    pub fn service_failing_saves(&self, failing: &'static str) -> ParkingService {
        let store: Arc<dyn RecordStore> = Arc::new(FailingSaves {
            inner: FileRecordStore::new(self.root.clone()),
            failing,
        });
        ParkingService::with_clock(store, self.locks.clone(), Arc::new(self.clock.clone()))
    }

    pub async fn seed_lots(&self, names: &[&str]) {
        let now = Utc::now();
        let lots: Vec<ParkingLot> = names
            .iter()
            .enumerate()
            .map(|(i, name)| ParkingLot::new(i as i64 + 1, name.to_string(), "1".to_string(), now))
            .collect();
        save_table(self.store.as_ref(), &lots).await.unwrap();
    }

    pub async fn seed_catalog(&self, entries: &[(&str, i64, i64)]) {
        let now = Utc::now();
        let catalog: Vec<VehicleCatalogEntry> = entries
            .iter()
            .enumerate()
            .map(|(i, (vehicle_type, first_hour_price, percent))| VehicleCatalogEntry {
                id: i as i64 + 1,
                name: format!("{} tariff", vehicle_type),
                vehicle_type: vehicle_type.to_string(),
                first_hour_price: *first_hour_price,
                price_per_hour_percent: *percent,
                created_at: now,
                updated_at: now,
                deleted_at: None,
            })
            .collect();
        save_table(self.store.as_ref(), &catalog).await.unwrap();
    }

    pub fn table_file(&self, table: &str) -> PathBuf {
        self.root.join(format!("{}.json", table))
    }
}

impl Drop for TestStorage {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

/// File store that refuses to write one table.
pub struct FailingSaves {
    inner: FileRecordStore,
    failing: &'static str,
}

#[async_trait]
impl RecordStore for FailingSaves {
    async fn exists(&self, table: &str) -> bool {
        self.inner.exists(table).await
    }

    async fn create_empty(&self, table: &str) -> Result<PathBuf, StorageError> {
        self.inner.create_empty(table).await
    }

    async fn load_all(&self, table: &str) -> Result<Vec<u8>, StorageError> {
        self.inner.load_all(table).await
    }

    async fn save_all(&self, table: &str, contents: Vec<u8>) -> Result<(), StorageError> {
        if table == self.failing {
            return Err(StorageError::Io {
                table: table.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only table"),
            });
        }
        self.inner.save_all(table, contents).await
    }
}
