//! Parking lifecycle
//!
//! Check-in and check-out for a single facility plus the read-only ledger
//! queries. Every call re-reads the tables it needs from storage, works on
//! the in-memory collections and writes them back whole.
//!
//! Per plate the state is derived from the ledger:
//! `NotParked` (no row, or latest row checked out) -> `Parked` (latest row
//! checked in) -> `NotParked` after check-out.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::database::{RecordStore, StorageError, TableGuards, TableLocks};
use crate::models::parking_lot::PARKING_LOT_TABLE;
use crate::models::parking_session::PARKING_SESSION_TABLE;
use crate::models::vehicle::VEHICLE_TABLE;
use crate::repositories::{
    parking_lot_repository, vehicle_repository, ParkingLotRepository, ParkingSessionRepository,
    VehicleRepository,
};
use crate::services::clock::{Clock, SystemClock};
use crate::services::ledger::ParkingLedger;
use crate::services::lot_allocator;
use crate::services::pricing;
use crate::services::table_loader::load_check_out_tables;
use crate::utils::errors::{
    bad_request_error, conflict_error, not_found_error, reasons, AppError, AppResult,
};

/// Result of a successful check-in.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckInReceipt {
    pub plate_number: String,
    pub vehicle_type: String,
    pub color: String,
    pub lot_name: String,
    pub check_in_at: DateTime<Utc>,
}

/// Result of a successful check-out.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOutInvoice {
    pub plate_number: String,
    pub lot_name: String,
    pub elapsed_hours: i64,
    pub fee: i64,
    pub check_in_at: DateTime<Utc>,
    pub check_out_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct ParkingService {
    lots: ParkingLotRepository,
    catalog: VehicleRepository,
    sessions: ParkingSessionRepository,
    locks: TableLocks,
    clock: Arc<dyn Clock>,
}

impl ParkingService {
    pub fn new(store: Arc<dyn RecordStore>, locks: TableLocks) -> Self {
        Self::with_clock(store, locks, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn RecordStore>, locks: TableLocks, clock: Arc<dyn Clock>) -> Self {
        Self {
            lots: ParkingLotRepository::new(store.clone()),
            catalog: VehicleRepository::new(store.clone()),
            sessions: ParkingSessionRepository::new(store),
            locks,
            clock,
        }
    }

    async fn lock(&self, tables: &[&'static str]) -> TableGuards {
        self.locks.acquire(tables).await
    }

    pub async fn check_in(
        &self,
        plate_number: &str,
        vehicle_type: &str,
        color: &str,
    ) -> AppResult<CheckInReceipt> {
        let _guards = self.lock(&[PARKING_LOT_TABLE, PARKING_SESSION_TABLE]).await;

        let mut ledger = ParkingLedger::new(self.sessions.load_all().await?);
        let mut lots = self.lots.load_all().await?;

        if ledger.is_parked(plate_number) {
            return Err(conflict_error(reasons::VEHICLE_ALREADY_PARKED));
        }

        let now = self.clock.now();
        let lot_name = lot_allocator::allocate_and_occupy(&mut lots, now)
            .map(|lot| lot.name.clone())
            .ok_or_else(|| AppError::Capacity(reasons::NO_PARKING_AREA_AVAILABLE.to_string()))?;

        let session = ledger
            .record_check_in(plate_number, vehicle_type, color, &lot_name, now)
            .clone();

        // No cross-table atomicity: both writes are attempted even if the
        // first one fails.
        let saved_sessions = self.sessions.save_all(ledger.sessions()).await;
        let saved_lots = self.lots.save_all(&lots).await;
        first_failure(saved_sessions, saved_lots)?;

        info!(
            "Vehicle {} checked in at lot {} ({})",
            session.plate_number, session.lot_name, session.check_in_at
        );

        Ok(CheckInReceipt {
            plate_number: session.plate_number,
            vehicle_type: session.vehicle_type,
            color: session.color,
            lot_name: session.lot_name,
            check_in_at: session.check_in_at,
        })
    }

    pub async fn check_out(&self, plate_number: &str) -> AppResult<CheckOutInvoice> {
        let _guards = self
            .lock(&[PARKING_SESSION_TABLE, VEHICLE_TABLE, PARKING_LOT_TABLE])
            .await;

        let tables = load_check_out_tables(&self.sessions, &self.catalog, &self.lots).await?;
        let mut ledger = ParkingLedger::new(tables.sessions);
        let mut lots = tables.lots;

        let session = match ledger.latest_session_for(plate_number) {
            None => return Err(not_found_error(reasons::NO_VEHICLE_PARKED)),
            Some(session) if !session.is_parked() => {
                return Err(conflict_error(reasons::VEHICLE_ALREADY_LEFT))
            }
            Some(session) => session.clone(),
        };

        let tariff = vehicle_repository::find_by_type(&tables.catalog, &session.vehicle_type)
            .ok_or_else(|| bad_request_error(reasons::VEHICLE_DATA_NOT_FOUND))?;

        let lot_index = parking_lot_repository::position_for_release(&lots, &session.lot_name)
            .ok_or_else(|| bad_request_error(reasons::PARKING_AREA_NOT_FOUND))?;

        let now = self.clock.now();
        let elapsed_hours = pricing::elapsed_hours(session.check_in_at, now);
        let fee = pricing::compute_fee(tariff, elapsed_hours);
        debug!(
            "Pricing {}: {} h at {} + {}/h",
            plate_number,
            elapsed_hours,
            tariff.first_hour_price,
            pricing::hourly_rate(tariff)
        );

        ledger.record_check_out(&session, fee, now);
        lot_allocator::release(&mut lots, lot_index, now);

        let saved_sessions = self.sessions.save_all(ledger.sessions()).await;
        let saved_lots = self.lots.save_all(&lots).await;
        first_failure(saved_sessions, saved_lots)?;

        info!(
            "Vehicle {} checked out of lot {} after {} h, fee {}",
            session.plate_number, session.lot_name, elapsed_hours, fee
        );

        Ok(CheckOutInvoice {
            plate_number: session.plate_number,
            lot_name: session.lot_name,
            elapsed_hours,
            fee,
            check_in_at: session.check_in_at,
            check_out_at: now,
        })
    }

    /// Plates ever parked with `color`, deduplicated.
    pub async fn find_plates_by_color(&self, color: &str) -> AppResult<Vec<String>> {
        let ledger = ParkingLedger::new(self.sessions.load_all().await?);
        Ok(ledger.plates_by_color(color))
    }

    /// Vehicles of `vehicle_type` currently parked.
    pub async fn count_vehicles_by_type(&self, vehicle_type: &str) -> AppResult<usize> {
        let ledger = ParkingLedger::new(self.sessions.load_all().await?);
        Ok(ledger.count_parked_by_type(vehicle_type))
    }
}

fn first_failure(
    first: Result<(), StorageError>,
    second: Result<(), StorageError>,
) -> AppResult<()> {
    match (first, second) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(AppError::Storage(e)),
        (Err(e), Err(second)) => {
            error!("Second table write also failed: {}", second);
            Err(AppError::Storage(e))
        }
    }
}
