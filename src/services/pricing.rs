//! Parking fee computation
//!
//! `fee = first_hour_price + elapsed_hours * hourly_rate` where
//! `hourly_rate = floor(first_hour_price * price_per_hour_percent / 100)`
//! and `elapsed_hours` is the number of whole hours parked.

use chrono::{DateTime, Utc};

use crate::models::VehicleCatalogEntry;

/// Whole hours between check-in and check-out, truncated. A check-out
/// stamped before the check-in counts as zero hours.
pub fn elapsed_hours(check_in_at: DateTime<Utc>, check_out_at: DateTime<Utc>) -> i64 {
    (check_out_at - check_in_at).num_hours().max(0)
}

/// Price of every hour after the first.
pub fn hourly_rate(entry: &VehicleCatalogEntry) -> i64 {
    entry
        .first_hour_price
        .saturating_mul(entry.price_per_hour_percent)
        .div_euclid(100)
}

pub fn compute_fee(entry: &VehicleCatalogEntry, elapsed_hours: i64) -> i64 {
    entry
        .first_hour_price
        .saturating_add(elapsed_hours.max(0).saturating_mul(hourly_rate(entry)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn tariff(first_hour_price: i64, price_per_hour_percent: i64) -> VehicleCatalogEntry {
        let now = Utc::now();
        VehicleCatalogEntry {
            id: 1,
            name: "Car".to_string(),
            vehicle_type: "car".to_string(),
            first_hour_price,
            price_per_hour_percent,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_two_and_a_half_hours() {
        let entry = tariff(5000, 50);
        let check_in = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let check_out = check_in + Duration::minutes(150);

        let hours = elapsed_hours(check_in, check_out);
        assert_eq!(hours, 2);
        assert_eq!(hourly_rate(&entry), 2500);
        assert_eq!(compute_fee(&entry, hours), 10000);
    }

    #[test]
    fn test_zero_hours_is_first_hour_price() {
        let entry = tariff(3000, 40);
        assert_eq!(compute_fee(&entry, 0), 3000);
    }

    #[test]
    fn test_hours_are_truncated_not_rounded() {
        let check_in = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        assert_eq!(elapsed_hours(check_in, check_in + Duration::minutes(59)), 0);
        assert_eq!(elapsed_hours(check_in, check_in + Duration::minutes(119)), 1);
        assert_eq!(elapsed_hours(check_in, check_in + Duration::minutes(120)), 2);
    }

    #[test]
    fn test_clock_skew_never_goes_negative() {
        let check_in = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        assert_eq!(elapsed_hours(check_in, check_in - Duration::hours(3)), 0);
        assert_eq!(compute_fee(&tariff(1000, 10), -5), 1000);
    }

    #[test]
    fn test_hourly_rate_is_floored() {
        // 3333 * 33 / 100 = 1099.89
        assert_eq!(hourly_rate(&tariff(3333, 33)), 1099);
    }

    #[test]
    fn test_fee_is_monotonic_in_hours() {
        let entry = tariff(7000, 25);
        let fees: Vec<i64> = (0..48).map(|h| compute_fee(&entry, h)).collect();
        assert!(fees.windows(2).all(|pair| pair[0] <= pair[1]));
    }
}
