//! Concurrent table loading for check-out
//!
//! The ledger, the vehicle catalog and the parking lots are loaded side by
//! side and joined before check-out continues. A failing load reports its
//! error on a shared channel; once all three have finished the first
//! reported error is returned and any later ones are dropped.

use futures::join;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use tracing::warn;

use crate::database::{StorageError, Table};
use crate::models::{ParkingLot, ParkingSession, VehicleCatalogEntry};
use crate::repositories::{
    ParkingLotRepository, ParkingSessionRepository, TableRepository, VehicleRepository,
};
use crate::utils::errors::{AppError, AppResult};

#[derive(Debug)]
pub struct CheckOutTables {
    pub sessions: Vec<ParkingSession>,
    pub catalog: Vec<VehicleCatalogEntry>,
    pub lots: Vec<ParkingLot>,
}

pub async fn load_check_out_tables(
    sessions: &ParkingSessionRepository,
    catalog: &VehicleRepository,
    lots: &ParkingLotRepository,
) -> AppResult<CheckOutTables> {
    let (errors, mut reported) = unbounded_channel();

    let (sessions, catalog, lots) = join!(
        load_reporting(sessions, &errors),
        load_reporting(catalog, &errors),
        load_reporting(lots, &errors),
    );
    drop(errors);

    match (sessions, catalog, lots) {
        (Some(sessions), Some(catalog), Some(lots)) => Ok(CheckOutTables {
            sessions,
            catalog,
            lots,
        }),
        _ => match reported.recv().await {
            Some(first) => Err(AppError::Storage(first)),
            None => Err(AppError::Internal("table load aborted without an error".to_string())),
        },
    }
}

async fn load_reporting<T: Table>(
    repository: &TableRepository<T>,
    errors: &UnboundedSender<StorageError>,
) -> Option<Vec<T>> {
    match repository.load_all().await {
        Ok(rows) => Some(rows),
        Err(e) => {
            warn!("Loading table '{}' failed: {}", repository.table(), e);
            // The receiver outlives every sender, so this cannot fail.
            let _ = errors.send(e);
            None
        }
    }
}
