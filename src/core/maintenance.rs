//! Maintenance business logic - reference types and service records.
//!
//! Maintenance types are seeded reference data. Service records are created once and
//! never edited; their next-service targets are projected by
//! [`crate::core::schedule::project_next_service`] at insert time.

use crate::{
    config::maintenance_types::MaintenanceTypeConfig,
    core::{
        car::require_owned_car,
        schedule::{IntervalPolicy, project_next_service},
    },
    entities::{MaintenanceRecord, MaintenanceType, maintenance_record, maintenance_type},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{debug, info, instrument};

/// A service record together with its maintenance type.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceEntry {
    /// The stored record
    pub record: maintenance_record::Model,
    /// The referenced type, if it still exists
    pub maintenance_type: Option<maintenance_type::Model>,
}

impl ServiceEntry {
    /// Name of the service type, or a placeholder when the type is gone.
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.maintenance_type
            .as_ref()
            .map_or("Manutenção", |t| t.name.as_str())
    }
}

/// Values entered when logging a service.
#[derive(Debug, Clone, PartialEq)]
pub struct NewServiceRecord {
    /// Type of service performed
    pub maintenance_type_id: i64,
    /// Day of the service
    pub date_performed: NaiveDate,
    /// Odometer reading at service time
    pub mileage_at_service: i64,
    /// Amount paid
    pub cost: f64,
    /// Workshop name
    pub service_provider: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// Explicit km target, replacing the projected one
    pub next_service_km: Option<i64>,
    /// Explicit date target, replacing the projected one
    pub next_service_date: Option<NaiveDate>,
}

/// Inserts every configured maintenance type whose name is not in the table yet.
///
/// Existing rows are never modified, so editing config.toml does not rewrite history.
/// Returns the number of inserted types.
#[instrument(skip(db, types))]
pub async fn seed_maintenance_types(
    db: &DatabaseConnection,
    types: &[MaintenanceTypeConfig],
) -> Result<usize> {
    let mut inserted = 0;

    for cfg in types {
        let existing = get_maintenance_type_by_name(db, &cfg.name).await?;
        if existing.is_some() {
            debug!(name = %cfg.name, "Maintenance type already present, skipping");
            continue;
        }

        maintenance_type::ActiveModel {
            name: Set(cfg.name.trim().to_string()),
            category: Set(cfg.category.clone()),
            description: Set(cfg.description.clone()),
            default_interval_km: Set(cfg.interval_km),
            default_interval_months: Set(cfg.interval_months),
            ..Default::default()
        }
        .insert(db)
        .await?;
        inserted += 1;
    }

    info!(inserted, configured = types.len(), "Seeded maintenance types");
    Ok(inserted)
}

/// Retrieves all maintenance types ordered by name.
pub async fn list_maintenance_types(
    db: &DatabaseConnection,
) -> Result<Vec<maintenance_type::Model>> {
    MaintenanceType::find()
        .order_by_asc(maintenance_type::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a maintenance type by its exact name.
pub async fn get_maintenance_type_by_name(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<maintenance_type::Model>> {
    MaintenanceType::find()
        .filter(maintenance_type::Column::Name.eq(name.trim()))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Lists the service history of a car, most recent service first.
pub async fn list_records_for_car(
    db: &DatabaseConnection,
    car_id: i64,
) -> Result<Vec<ServiceEntry>> {
    let rows = MaintenanceRecord::find()
        .filter(maintenance_record::Column::CarId.eq(car_id))
        .order_by_desc(maintenance_record::Column::DatePerformed)
        .order_by_desc(maintenance_record::Column::Id)
        .find_also_related(MaintenanceType)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(record, maintenance_type)| ServiceEntry {
            record,
            maintenance_type,
        })
        .collect())
}

/// Logs a service on one of the owner's cars and returns the car's refreshed history.
///
/// The next-service targets come from the type's interval policy unless the caller
/// supplies explicit ones.
#[instrument(skip(db, new_record))]
pub async fn create_record(
    db: &DatabaseConnection,
    owner_id: &str,
    car_id: i64,
    new_record: NewServiceRecord,
) -> Result<Vec<ServiceEntry>> {
    if new_record.mileage_at_service < 0 {
        return Err(Error::InvalidMileage {
            mileage: new_record.mileage_at_service,
        });
    }
    if !new_record.cost.is_finite() || new_record.cost < 0.0 {
        return Err(Error::InvalidAmount {
            amount: new_record.cost,
        });
    }

    let car = require_owned_car(db, owner_id, car_id).await?;
    let kind = MaintenanceType::find_by_id(new_record.maintenance_type_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::MaintenanceTypeNotFound {
            maintenance_type: format!("#{}", new_record.maintenance_type_id),
        })?;

    let projected = project_next_service(
        IntervalPolicy::from(&kind),
        new_record.mileage_at_service,
        new_record.date_performed,
    );
    let next_service_km = new_record.next_service_km.or(projected.km);
    let next_service_date = new_record.next_service_date.or(projected.date);

    let record = maintenance_record::ActiveModel {
        car_id: Set(car.id),
        maintenance_type_id: Set(kind.id),
        date_performed: Set(new_record.date_performed),
        mileage_at_service: Set(new_record.mileage_at_service),
        cost: Set(new_record.cost),
        next_service_km: Set(next_service_km),
        next_service_date: Set(next_service_date),
        service_provider: Set(new_record.service_provider),
        notes: Set(new_record.notes),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(
        record_id = record.id,
        car_id = car.id,
        maintenance_type = %kind.name,
        "Logged maintenance service"
    );

    list_records_for_car(db, car.id).await
}
