//! Dashboard business logic - maintenance alerts across all of a user's cars.
//!
//! Alerts are computed on read with [`crate::core::due_status`]; nothing is scheduled or
//! stored. Only records with a date target are considered, soonest first.

use crate::{
    core::{
        car::list_cars,
        due_status::{DueAssessment, DueStatus, assess_record},
    },
    entities::{MaintenanceRecord, MaintenanceType, car, maintenance_record, maintenance_type},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, prelude::*};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// One maintenance record that needs attention.
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceAlert {
    /// The car the record belongs to
    pub car: car::Model,
    /// The record itself
    pub record: maintenance_record::Model,
    /// The referenced maintenance type, if it still exists
    pub maintenance_type: Option<maintenance_type::Model>,
    /// Status and remaining time/distance
    pub assessment: DueAssessment,
}

impl MaintenanceAlert {
    /// Name of the service type, or a placeholder when the type is gone.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.maintenance_type
            .as_ref()
            .map_or("Manutenção", |t| t.name.as_str())
    }
}

/// Fleet-level counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FleetStats {
    /// Cars owned by the user
    pub total_cars: usize,
    /// Cars with at least one overdue record
    pub cars_with_overdue: usize,
    /// Cars with a due-soon record and nothing overdue
    pub cars_with_upcoming: usize,
    /// Cars with no alert at all
    pub cars_up_to_date: usize,
}

/// Everything the dashboard view renders.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dashboard {
    /// Overdue records, soonest date first
    pub overdue: Vec<MaintenanceAlert>,
    /// Due-soon records, soonest date first
    pub upcoming: Vec<MaintenanceAlert>,
    /// Counters over the user's cars
    pub stats: FleetStats,
}

/// Classifies pre-loaded records into a dashboard.
///
/// `rows` must be ordered by next service date ascending; records of cars missing from
/// `cars` are ignored.
#[must_use]
pub fn build_dashboard(
    cars: &[car::Model],
    rows: Vec<(maintenance_record::Model, Option<maintenance_type::Model>)>,
    today: NaiveDate,
) -> Dashboard {
    let cars_by_id: HashMap<i64, &car::Model> = cars.iter().map(|c| (c.id, c)).collect();
    let mut overdue = Vec::new();
    let mut upcoming = Vec::new();

    for (record, maintenance_type) in rows {
        let Some(car) = cars_by_id.get(&record.car_id) else {
            continue;
        };

        let assessment = assess_record(&record, car.mileage, today);
        let bucket = match assessment.status {
            DueStatus::Overdue => &mut overdue,
            DueStatus::DueSoon => &mut upcoming,
            DueStatus::Ok => continue,
        };
        bucket.push(MaintenanceAlert {
            car: (*car).clone(),
            record,
            maintenance_type,
            assessment,
        });
    }

    let overdue_cars: HashSet<i64> = overdue.iter().map(|a| a.car.id).collect();
    let upcoming_cars: HashSet<i64> = upcoming
        .iter()
        .map(|a| a.car.id)
        .filter(|id| !overdue_cars.contains(id))
        .collect();

    let stats = FleetStats {
        total_cars: cars.len(),
        cars_with_overdue: overdue_cars.len(),
        cars_with_upcoming: upcoming_cars.len(),
        cars_up_to_date: cars.len() - overdue_cars.len() - upcoming_cars.len(),
    };

    Dashboard {
        overdue,
        upcoming,
        stats,
    }
}

/// Loads the owner's cars and dated records and builds the dashboard for `today`.
pub async fn load_dashboard(
    db: &DatabaseConnection,
    owner_id: &str,
    today: NaiveDate,
) -> Result<Dashboard> {
    let cars = list_cars(db, owner_id).await?;
    if cars.is_empty() {
        return Ok(Dashboard::default());
    }

    let car_ids: Vec<i64> = cars.iter().map(|c| c.id).collect();
    let rows = MaintenanceRecord::find()
        .filter(maintenance_record::Column::CarId.is_in(car_ids))
        .filter(maintenance_record::Column::NextServiceDate.is_not_null())
        .order_by_asc(maintenance_record::Column::NextServiceDate)
        .find_also_related(MaintenanceType)
        .all(db)
        .await?;

    debug!(cars = cars.len(), records = rows.len(), "Building dashboard");
    Ok(build_dashboard(&cars, rows, today))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::maintenance;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_empty_dashboard_without_cars() -> Result<()> {
        let db = setup_test_db().await?;
        let dashboard = load_dashboard(&db, TEST_OWNER, date(2024, 6, 1)).await?;
        assert_eq!(dashboard, Dashboard::default());
        Ok(())
    }

    #[tokio::test]
    async fn test_dashboard_classifies_records() -> Result<()> {
        let db = setup_test_db().await?;
        let kind = create_test_maintenance_type(&db, "Troca de óleo", None, None).await?;
        let late_car = create_test_car(&db, TEST_OWNER, 60_000).await?;
        let soon_car = create_test_car(&db, TEST_OWNER, 30_000).await?;
        let fine_car = create_test_car(&db, TEST_OWNER, 5_000).await?;
        let not_mine = create_test_car(&db, OTHER_OWNER, 1).await?;
        let today = date(2024, 6, 1);

        let mut overdue = sample_service(kind.id, date(2023, 6, 1), 50_000);
        overdue.next_service_date = Some(date(2024, 5, 20));
        maintenance::create_record(&db, TEST_OWNER, late_car.id, overdue).await?;

        let mut due_soon = sample_service(kind.id, date(2024, 1, 1), 25_000);
        due_soon.next_service_date = Some(date(2024, 6, 20));
        maintenance::create_record(&db, TEST_OWNER, soon_car.id, due_soon).await?;

        let mut fine = sample_service(kind.id, date(2024, 1, 1), 4_000);
        fine.next_service_date = Some(date(2025, 1, 1));
        maintenance::create_record(&db, TEST_OWNER, fine_car.id, fine).await?;

        // km-only record: no date target, never listed on the dashboard
        let mut km_only = sample_service(kind.id, date(2024, 1, 1), 4_000);
        km_only.next_service_km = Some(4_500);
        maintenance::create_record(&db, TEST_OWNER, fine_car.id, km_only).await?;

        let mut other = sample_service(kind.id, date(2020, 1, 1), 0);
        other.next_service_date = Some(date(2021, 1, 1));
        maintenance::create_record(&db, OTHER_OWNER, not_mine.id, other).await?;

        let dashboard = load_dashboard(&db, TEST_OWNER, today).await?;

        assert_eq!(dashboard.overdue.len(), 1);
        assert_eq!(dashboard.overdue[0].car.id, late_car.id);
        assert_eq!(dashboard.overdue[0].type_name(), "Troca de óleo");
        assert_eq!(
            dashboard.overdue[0].assessment.remaining_text(),
            "12 dias atrasado"
        );

        assert_eq!(dashboard.upcoming.len(), 1);
        assert_eq!(dashboard.upcoming[0].car.id, soon_car.id);

        assert_eq!(
            dashboard.stats,
            FleetStats {
                total_cars: 3,
                cars_with_overdue: 1,
                cars_with_upcoming: 1,
                cars_up_to_date: 1,
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_car_with_both_alert_kinds_counts_once() -> Result<()> {
        let db = setup_test_db().await?;
        let kind = create_test_maintenance_type(&db, "Revisão", None, None).await?;
        let car = create_test_car(&db, TEST_OWNER, 10_000).await?;

        let mut late = sample_service(kind.id, date(2023, 1, 1), 1_000);
        late.next_service_date = Some(date(2024, 1, 1));
        maintenance::create_record(&db, TEST_OWNER, car.id, late).await?;

        let mut soon = sample_service(kind.id, date(2023, 1, 1), 1_000);
        soon.next_service_date = Some(date(2024, 2, 10));
        maintenance::create_record(&db, TEST_OWNER, car.id, soon).await?;

        let dashboard = load_dashboard(&db, TEST_OWNER, date(2024, 2, 1)).await?;
        assert_eq!(dashboard.overdue.len(), 1);
        assert_eq!(dashboard.upcoming.len(), 1);
        assert_eq!(dashboard.stats.cars_with_overdue, 1);
        assert_eq!(dashboard.stats.cars_with_upcoming, 0);
        assert_eq!(dashboard.stats.cars_up_to_date, 0);

        Ok(())
    }
}
