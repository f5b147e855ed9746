//! Next-service projection.
//!
//! When a maintenance record is created, the referenced type's interval policy is applied
//! to the service mileage and date. The result is stored on the record and is never
//! recomputed, so later changes to a type's defaults do not touch existing records.

use crate::entities::maintenance_type;
use chrono::{Months, NaiveDate};

/// A maintenance type's default recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntervalPolicy {
    /// Distance between services in km
    pub km: Option<i64>,
    /// Calendar months between services
    pub months: Option<u32>,
}

impl From<&maintenance_type::Model> for IntervalPolicy {
    fn from(value: &maintenance_type::Model) -> Self {
        Self {
            km: value.default_interval_km,
            months: value
                .default_interval_months
                .and_then(|months| u32::try_from(months).ok()),
        }
    }
}

/// Projected next service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NextService {
    /// Odometer target, `None` when the policy has no distance interval
    pub km: Option<i64>,
    /// Date target, `None` when the policy has no time interval
    pub date: Option<NaiveDate>,
}

/// Projects the next service from an interval policy and the service just performed.
///
/// Month arithmetic clamps to the last valid day, so Jan 31 + 1 month lands on the last
/// day of February.
#[must_use]
pub fn project_next_service(
    policy: IntervalPolicy,
    mileage: i64,
    performed_on: NaiveDate,
) -> NextService {
    let km = policy
        .km
        .filter(|interval| *interval > 0)
        .map(|interval| mileage.saturating_add(interval));

    let date = policy
        .months
        .filter(|months| *months > 0)
        .and_then(|months| performed_on.checked_add_months(Months::new(months)));

    NextService { km, date }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_projects_km_and_date() {
        let next = project_next_service(
            IntervalPolicy {
                km: Some(10_000),
                months: Some(12),
            },
            45_300,
            date(2024, 3, 15),
        );
        assert_eq!(next.km, Some(55_300));
        assert_eq!(next.date, Some(date(2025, 3, 15)));
    }

    #[test]
    fn test_month_rollover_in_leap_year() {
        let next = project_next_service(
            IntervalPolicy {
                km: None,
                months: Some(1),
            },
            0,
            date(2024, 1, 31),
        );
        assert_eq!(next.date, Some(date(2024, 2, 29)));
    }

    #[test]
    fn test_month_rollover_in_common_year() {
        let next = project_next_service(
            IntervalPolicy {
                km: None,
                months: Some(1),
            },
            0,
            date(2023, 1, 31),
        );
        assert_eq!(next.date, Some(date(2023, 2, 28)));
    }

    #[test]
    fn test_missing_or_zero_intervals_project_nothing() {
        let none = project_next_service(IntervalPolicy::default(), 12_000, date(2024, 5, 1));
        assert_eq!(none, NextService::default());

        let zero = project_next_service(
            IntervalPolicy {
                km: Some(0),
                months: Some(0),
            },
            12_000,
            date(2024, 5, 1),
        );
        assert_eq!(zero, NextService::default());
    }

    #[test]
    fn test_policy_from_type_ignores_negative_months() {
        let model = maintenance_type::Model {
            id: 1,
            name: "Bateria".to_string(),
            category: "eletrica".to_string(),
            description: None,
            default_interval_km: None,
            default_interval_months: Some(-3),
        };
        let policy = IntervalPolicy::from(&model);
        assert_eq!(policy.months, None);
    }
}
