//! Parking ledger
//!
//! Append-only history of check-ins and check-outs. The current state of a
//! plate is the latest row for that plate in insertion order, so every
//! lookup walks the history from the newest entry backwards.

use chrono::{DateTime, Utc};

use crate::models::{next_id, ParkingSession, ParkingStatus};

#[derive(Debug, Clone, Default)]
pub struct ParkingLedger {
    sessions: Vec<ParkingSession>,
}

impl ParkingLedger {
    pub fn new(sessions: Vec<ParkingSession>) -> Self {
        Self { sessions }
    }

    pub fn sessions(&self) -> &[ParkingSession] {
        &self.sessions
    }

    pub fn into_sessions(self) -> Vec<ParkingSession> {
        self.sessions
    }

    fn active(&self) -> impl DoubleEndedIterator<Item = &ParkingSession> {
        self.sessions.iter().filter(|session| !session.is_deleted())
    }

    /// The most recent row recorded for `plate_number`.
    pub fn latest_session_for(&self, plate_number: &str) -> Option<&ParkingSession> {
        self.active()
            .rev()
            .find(|session| session.plate_number == plate_number)
    }

    pub fn is_parked(&self, plate_number: &str) -> bool {
        self.latest_session_for(plate_number)
            .map(ParkingSession::is_parked)
            .unwrap_or(false)
    }

    pub fn record_check_in(
        &mut self,
        plate_number: &str,
        vehicle_type: &str,
        color: &str,
        lot_name: &str,
        now: DateTime<Utc>,
    ) -> &ParkingSession {
        let session = ParkingSession {
            id: next_id(&self.sessions),
            plate_number: plate_number.to_string(),
            vehicle_type: vehicle_type.to_string(),
            color: color.to_string(),
            check_in_at: now,
            check_out_at: None,
            status: ParkingStatus::CheckedIn,
            fee: 0,
            lot_name: lot_name.to_string(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.push(session)
    }

    /// Append the closing row for `session`. The check-in row is left as is.
    pub fn record_check_out(
        &mut self,
        session: &ParkingSession,
        fee: i64,
        now: DateTime<Utc>,
    ) -> &ParkingSession {
        let closing = ParkingSession {
            id: next_id(&self.sessions),
            plate_number: session.plate_number.clone(),
            vehicle_type: session.vehicle_type.clone(),
            color: session.color.clone(),
            check_in_at: session.check_in_at,
            check_out_at: Some(now),
            status: ParkingStatus::CheckedOut,
            fee,
            lot_name: session.lot_name.clone(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.push(closing)
    }

    fn push(&mut self, session: ParkingSession) -> &ParkingSession {
        self.sessions.push(session);
        &self.sessions[self.sessions.len() - 1]
    }

    /// Plates ever recorded with `color`, each listed once in order of
    /// first appearance.
    pub fn plates_by_color(&self, color: &str) -> Vec<String> {
        let mut plates: Vec<String> = Vec::new();
        for session in self.active().filter(|session| session.color == color) {
            if !plates.contains(&session.plate_number) {
                plates.push(session.plate_number.clone());
            }
        }
        plates
    }

    /// Vehicles of `vehicle_type` currently parked.
    pub fn count_parked_by_type(&self, vehicle_type: &str) -> usize {
        let mut seen: Vec<&str> = Vec::new();
        let mut count = 0;
        for session in self.active().rev() {
            if seen.contains(&session.plate_number.as_str()) {
                continue;
            }
            seen.push(&session.plate_number);
            if session.is_parked() && session.vehicle_type == vehicle_type {
                count += 1;
            }
        }
        count
    }
}
