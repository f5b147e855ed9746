//! Shared test utilities for `GarageBuddy`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    config::maintenance_types::MaintenanceTypeConfig,
    core::{
        car::{self, NewCar},
        fuel::{FuelType, NewFuelRecord},
        fuel_draft::{FuelDraft, FuelField},
        maintenance::{self, NewServiceRecord},
    },
    entities,
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Discord ID used as the owner in most tests
pub const TEST_OWNER: &str = "111111111111111111";
/// A second account, for ownership checks
pub const OTHER_OWNER: &str = "222222222222222222";

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = crate::config::database::create_connection("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Shorthand for a calendar date.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Registration values for a car with a plate and flex engine.
pub fn sample_car(brand: &str, model: &str) -> NewCar {
    NewCar {
        brand: brand.to_string(),
        model: model.to_string(),
        year: 2015,
        license_plate: Some("ABC1D23".to_string()),
        color: None,
        engine_type: Some("flex".to_string()),
        mileage: 10_000,
    }
}

/// Registers a Fiat Uno for `owner_id` at `mileage` and returns it.
pub async fn create_test_car(
    db: &DatabaseConnection,
    owner_id: &str,
    mileage: i64,
) -> Result<entities::car::Model> {
    let mut new_car = sample_car("Fiat", "Uno");
    new_car.mileage = mileage;
    car::create_car(db, owner_id, new_car)
        .await?
        .into_iter()
        .max_by_key(|c| c.id)
        .ok_or_else(|| Error::CarNotFound {
            car: "freshly created".to_string(),
        })
}

/// Creates a maintenance type with the given interval policy.
pub async fn create_test_maintenance_type(
    db: &DatabaseConnection,
    name: &str,
    interval_km: Option<i64>,
    interval_months: Option<i32>,
) -> Result<entities::maintenance_type::Model> {
    let config = MaintenanceTypeConfig {
        name: name.to_string(),
        category: "geral".to_string(),
        description: None,
        interval_km,
        interval_months,
    };
    maintenance::seed_maintenance_types(db, &[config]).await?;
    maintenance::get_maintenance_type_by_name(db, name)
        .await?
        .ok_or_else(|| Error::MaintenanceTypeNotFound {
            maintenance_type: name.to_string(),
        })
}

/// A service costing 250.00 with no explicit next-service targets.
pub fn sample_service(
    maintenance_type_id: i64,
    date_performed: NaiveDate,
    mileage_at_service: i64,
) -> NewServiceRecord {
    NewServiceRecord {
        maintenance_type_id,
        date_performed,
        mileage_at_service,
        cost: 250.0,
        service_provider: Some("Oficina do Zé".to_string()),
        notes: None,
        next_service_km: None,
        next_service_date: None,
    }
}

/// A gasoline fill-up with liters and price entered in that order.
pub fn sample_fill_up(
    date_filled: NaiveDate,
    mileage: i64,
    liters: f64,
    cost_per_liter: f64,
    is_full_tank: bool,
) -> NewFuelRecord {
    NewFuelRecord {
        date_filled,
        mileage,
        fuel_type: FuelType::Gasolina,
        draft: FuelDraft::default()
            .with(FuelField::Liters, liters)
            .with(FuelField::CostPerLiter, cost_per_liter),
        gas_station: None,
        is_full_tank,
        notes: None,
    }
}
