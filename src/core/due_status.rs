//! Maintenance due-status classification.
//!
//! Framework-agnostic and pure: "today" is passed in, so callers decide the clock and
//! tests stay deterministic. Evaluated once per record per render, nothing is stored.

use crate::entities::maintenance_record;
use chrono::NaiveDate;
use std::fmt;

/// Days ahead of the due date at which a service is reported as due soon
pub const DUE_SOON_DAYS: i64 = 30;
/// Remaining km at which a service is reported as due soon
pub const DUE_SOON_KM: i64 = 1000;

/// Classification of a maintenance record against today and the car's mileage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DueStatus {
    /// Date target has passed or the km target has been reached
    Overdue,
    /// Within 30 days or 1000 km of a target
    DueSoon,
    /// Nothing due
    Ok,
}

impl DueStatus {
    /// Status label shown to users
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overdue => "Atrasada",
            Self::DueSoon => "Em breve",
            Self::Ok => "Em dia",
        }
    }

    /// Status indicator used in replies
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Overdue => "🔴",
            Self::DueSoon => "🟡",
            Self::Ok => "🟢",
        }
    }
}

impl fmt::Display for DueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The targets of a record, detached from storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ServiceTarget {
    /// Odometer target; `None` and `Some(0)` both mean "no km target"
    pub km: Option<i64>,
    /// Date target
    pub date: Option<NaiveDate>,
}

impl ServiceTarget {
    fn km_target(self) -> Option<i64> {
        self.km.filter(|km| *km > 0)
    }
}

impl From<&maintenance_record::Model> for ServiceTarget {
    fn from(record: &maintenance_record::Model) -> Self {
        Self {
            km: record.next_service_km,
            date: record.next_service_date,
        }
    }
}

/// Result of evaluating one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueAssessment {
    /// Classification
    pub status: DueStatus,
    /// Whole days until the date target (negative when past)
    pub days_remaining: Option<i64>,
    /// Km until the km target (negative when past)
    pub km_remaining: Option<i64>,
}

impl DueAssessment {
    /// Human-readable remaining time/distance, e.g. `12 dias ou 800 km`.
    #[must_use]
    pub fn remaining_text(&self) -> String {
        let mut parts = Vec::with_capacity(2);

        if let Some(days) = self.days_remaining {
            if days <= 0 {
                parts.push(format!("{} dias atrasado", days.unsigned_abs()));
            } else {
                parts.push(format!("{days} dias"));
            }
        }

        if let Some(km) = self.km_remaining {
            if km <= 0 {
                parts.push(format!("{} km atrasado", format_km(km.unsigned_abs())));
            } else {
                parts.push(format!("{} km", format_km(km.unsigned_abs())));
            }
        }

        parts.join(" ou ")
    }
}

/// Classifies a service target for a car at `current_mileage` on `today`.
#[must_use]
pub fn assess(target: ServiceTarget, current_mileage: i64, today: NaiveDate) -> DueAssessment {
    let days_remaining = target
        .date
        .map(|date| date.signed_duration_since(today).num_days());
    let km_remaining = target.km_target().map(|km| km - current_mileage);

    let overdue_by_date = target.date.is_some_and(|date| date < today);
    let overdue_by_km = km_remaining.is_some_and(|km| km <= 0);

    let status = if overdue_by_date || overdue_by_km {
        DueStatus::Overdue
    } else if days_remaining.is_some_and(|days| days <= DUE_SOON_DAYS)
        || km_remaining.is_some_and(|km| km <= DUE_SOON_KM)
    {
        DueStatus::DueSoon
    } else {
        DueStatus::Ok
    };

    DueAssessment {
        status,
        days_remaining,
        km_remaining,
    }
}

/// Convenience wrapper that reads the targets from a stored record.
#[must_use]
pub fn assess_record(
    record: &maintenance_record::Model,
    current_mileage: i64,
    today: NaiveDate,
) -> DueAssessment {
    assess(ServiceTarget::from(record), current_mileage, today)
}

/// Formats a kilometre count with pt-BR digit grouping (`12345` → `12.345`).
#[must_use]
pub fn format_km(km: u64) -> String {
    let digits = km.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
