//! Parking lot allocation
//!
//! First-fit by stored order: the first lot that is free and not
//! soft-deleted wins. Floors and names play no part in the choice.
//!
//! Allocation hands back an index into the caller's collection and the
//! occupancy flag is flipped through that index, so the change always
//! lands in the same `Vec` that is saved afterwards.

use chrono::{DateTime, Utc};

use crate::models::ParkingLot;

/// Index of the first eligible lot, if any.
pub fn allocate(lots: &[ParkingLot]) -> Option<usize> {
    lots.iter().position(ParkingLot::is_available)
}

/// Allocate a lot and mark it occupied in place.
pub fn allocate_and_occupy(lots: &mut [ParkingLot], now: DateTime<Utc>) -> Option<&ParkingLot> {
    let index = allocate(lots)?;
    let lot = &mut lots[index];
    lot.is_occupied = true;
    lot.updated_at = now;
    Some(lot)
}

/// Free the lot at `index`.
pub fn release(lots: &mut [ParkingLot], index: usize, now: DateTime<Utc>) {
    if let Some(lot) = lots.get_mut(index) {
        lot.is_occupied = false;
        lot.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot(id: i64, occupied: bool, deleted: bool) -> ParkingLot {
        let now = Utc::now();
        let mut lot = ParkingLot::new(id, format!("L-{}", id), "1".to_string(), now);
        lot.is_occupied = occupied;
        if deleted {
            lot.deleted_at = Some(now);
        }
        lot
    }

    #[test]
    fn test_first_fit_skips_occupied_and_deleted() {
        let lots = vec![lot(1, true, false), lot(2, false, true), lot(3, false, false), lot(4, false, false)];
        assert_eq!(allocate(&lots), Some(2));
    }

    #[test]
    fn test_none_when_nothing_eligible() {
        assert_eq!(allocate(&[]), None);
        let lots = vec![lot(1, true, false), lot(2, false, true), lot(3, true, true)];
        assert_eq!(allocate(&lots), None);
    }

    #[test]
    fn test_allocated_lot_is_never_occupied_or_deleted() {
        for mask in 0u8..64 {
            let lots: Vec<ParkingLot> = (0..3)
                .map(|i| lot(i as i64, mask & (1 << (2 * i)) != 0, mask & (1 << (2 * i + 1)) != 0))
                .collect();
            let expected_some = lots.iter().any(|l| !l.is_occupied && l.deleted_at.is_none());

            match allocate(&lots) {
                Some(index) => {
                    assert!(!lots[index].is_occupied);
                    assert!(lots[index].deleted_at.is_none());
                }
                None => assert!(!expected_some),
            }
        }
    }

    #[test]
    fn test_occupy_mutates_the_collection() {
        let mut lots = vec![lot(1, true, false), lot(2, false, false)];
        let name = allocate_and_occupy(&mut lots, Utc::now()).map(|l| l.name.clone());

        assert_eq!(name.as_deref(), Some("L-2"));
        assert!(lots[1].is_occupied);
        assert_eq!(allocate(&lots), None);

        release(&mut lots, 1, Utc::now());
        assert!(!lots[1].is_occupied);
        assert_eq!(allocate(&lots), Some(1));
    }
}
