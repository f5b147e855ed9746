//! Fuel economy calculations.
//!
//! All functions take one car's fill-up history ordered newest first (the order returned
//! by [`crate::core::fuel::list_fuel_records`]) and recompute from scratch on every call.

use crate::entities::fuel_record;

/// Consumption between the two most recent full-tank fill-ups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Consumption {
    /// Distance per volume
    pub km_per_liter: f64,
    /// Distance between the two fill-ups
    pub km_driven: i64,
    /// Volume of the newer fill-up
    pub liters_used: f64,
}

/// Summary shown by the fuel view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuelSummary {
    /// Most recent consumption, if computable
    pub latest: Option<Consumption>,
    /// Average km/l over all valid full-tank pairs
    pub average_km_per_liter: Option<f64>,
    /// Sum of every fill-up's total cost
    pub total_spent: f64,
    /// Number of fill-ups considered
    pub fill_ups: usize,
}

fn full_tanks(records: &[fuel_record::Model]) -> impl Iterator<Item = &fuel_record::Model> {
    records.iter().filter(|record| record.is_full_tank)
}

/// Consumption from the two most recent full-tank fill-ups.
///
/// Returns `None` with fewer than two full tanks, a non-positive distance, or a
/// non-positive volume.
#[must_use]
pub fn latest_consumption(records: &[fuel_record::Model]) -> Option<Consumption> {
    let mut tanks = full_tanks(records);
    let newer = tanks.next()?;
    let older = tanks.next()?;

    let km_driven = newer.mileage - older.mileage;
    if km_driven <= 0 || newer.liters <= 0.0 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)] // odometer values are far below 2^52
    let km_per_liter = km_driven as f64 / newer.liters;

    Some(Consumption {
        km_per_liter,
        km_driven,
        liters_used: newer.liters,
    })
}

/// Average consumption over all full-tank pairs.
///
/// Each full tank is paired with the next older full tank. Pairs with a positive
/// distance contribute that distance and the newer fill-up's volume.
#[must_use]
pub fn average_consumption(records: &[fuel_record::Model]) -> Option<f64> {
    let tanks: Vec<&fuel_record::Model> = full_tanks(records).collect();

    let (total_km, total_liters, valid_pairs) = tanks.windows(2).fold(
        (0_i64, 0.0_f64, 0_usize),
        |(km, liters, pairs), pair| {
            let driven = pair[0].mileage - pair[1].mileage;
            if driven > 0 {
                (km + driven, liters + pair[0].liters, pairs + 1)
            } else {
                (km, liters, pairs)
            }
        },
    );

    if valid_pairs == 0 || total_liters <= 0.0 {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    Some(total_km as f64 / total_liters)
}

/// Sum of `total_cost` across every fill-up.
#[must_use]
pub fn total_spent(records: &[fuel_record::Model]) -> f64 {
    records.iter().map(|record| record.total_cost).sum()
}

/// Computes every statistic of the fuel view in one pass over the history.
#[must_use]
pub fn summarize(records: &[fuel_record::Model]) -> FuelSummary {
    FuelSummary {
        latest: latest_consumption(records),
        average_km_per_liter: average_consumption(records),
        total_spent: total_spent(records),
        fill_ups: records.len(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn fill(mileage: i64, liters: f64, full: bool, total_cost: f64) -> fuel_record::Model {
        fuel_record::Model {
            id: mileage,
            car_id: 1,
            date_filled: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            mileage,
            fuel_type: "gasolina".to_string(),
            liters,
            cost_per_liter: 0.0,
            total_cost,
            gas_station: None,
            is_full_tank: full,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_latest_consumption_from_two_full_tanks() {
        let records = vec![fill(10_000, 40.0, true, 0.0), fill(9_500, 38.0, true, 0.0)];
        let latest = latest_consumption(&records).unwrap();
        assert_eq!(latest.km_per_liter, 12.5);
        assert_eq!(latest.km_driven, 500);
        assert_eq!(latest.liters_used, 40.0);
    }

    #[test]
    fn test_latest_consumption_skips_partial_fills() {
        let records = vec![
            fill(10_400, 15.0, false, 0.0),
            fill(10_000, 40.0, true, 0.0),
            fill(9_800, 10.0, false, 0.0),
            fill(9_500, 38.0, true, 0.0),
        ];
        assert_eq!(latest_consumption(&records).unwrap().km_per_liter, 12.5);
    }

    #[test]
    fn test_latest_consumption_unavailable_with_one_full_tank() {
        let records = vec![fill(10_000, 40.0, true, 0.0), fill(9_500, 38.0, false, 0.0)];
        assert!(latest_consumption(&records).is_none());
        assert!(latest_consumption(&[]).is_none());
    }

    #[test]
    fn test_latest_consumption_rejects_bad_data() {
        let backwards = vec![fill(9_000, 40.0, true, 0.0), fill(9_500, 38.0, true, 0.0)];
        assert!(latest_consumption(&backwards).is_none());

        let no_volume = vec![fill(10_000, 0.0, true, 0.0), fill(9_500, 38.0, true, 0.0)];
        assert!(latest_consumption(&no_volume).is_none());
    }

    #[test]
    fn test_average_consumption_uses_newer_volume_per_pair() {
        // pairs: (10000,9500) -> 500 km / 40 l, (9500,9000) -> 500 km / 50 l
        let records = vec![
            fill(10_000, 40.0, true, 0.0),
            fill(9_500, 50.0, true, 0.0),
            fill(9_000, 45.0, true, 0.0),
        ];
        assert_eq!(average_consumption(&records).unwrap(), 1000.0 / 90.0);
    }

    #[test]
    fn test_average_consumption_skips_non_positive_pairs() {
        let records = vec![
            fill(10_000, 40.0, true, 0.0),
            fill(9_500, 30.0, true, 0.0),
            fill(9_500, 20.0, true, 0.0),
        ];
        assert_eq!(average_consumption(&records).unwrap(), 12.5);
    }

    #[test]
    fn test_average_consumption_unavailable_without_valid_pair() {
        let records = vec![fill(9_500, 40.0, true, 0.0), fill(9_500, 38.0, true, 0.0)];
        assert!(average_consumption(&records).is_none());
        assert!(average_consumption(&[fill(9_500, 40.0, true, 0.0)]).is_none());
    }

    #[test]
    fn test_total_spent_sums_all_records() {
        let records = vec![
            fill(3, 1.0, false, 100.0),
            fill(2, 1.0, true, 150.5),
            fill(1, 1.0, true, 0.0),
        ];
        assert_eq!(total_spent(&records), 250.5);
    }

    #[test]
    fn test_summarize_empty_history() {
        let summary = summarize(&[]);
        assert!(summary.latest.is_none());
        assert!(summary.average_km_per_liter.is_none());
        assert_eq!(summary.total_spent, 0.0);
        assert_eq!(summary.fill_ups, 0);
    }
}
