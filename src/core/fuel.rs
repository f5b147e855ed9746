//! Fuel business logic - logging fill-ups and reading a car's fuel history.

use crate::{
    core::{car::require_owned_car, fuel_draft::FuelDraft},
    entities::{FuelRecord, fuel_record},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};
use std::{fmt, str::FromStr};
use tracing::{info, instrument};

/// Kinds of fuel accepted for a fill-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FuelType {
    /// Gasoline
    #[default]
    Gasolina,
    /// Ethanol
    Etanol,
    /// Diesel
    Diesel,
    /// Compressed natural gas
    Gnv,
}

impl FuelType {
    /// Every accepted fuel type, in display order
    pub const ALL: [Self; 4] = [Self::Gasolina, Self::Etanol, Self::Diesel, Self::Gnv];

    /// Stored representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gasolina => "gasolina",
            Self::Etanol => "etanol",
            Self::Diesel => "diesel",
            Self::Gnv => "gnv",
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|fuel| fuel.as_str() == wanted)
            .ok_or_else(|| Error::InvalidInput {
                message: format!("unknown fuel type '{s}'"),
            })
    }
}

/// Values entered when logging a fill-up.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFuelRecord {
    /// Day of the fill-up
    pub date_filled: NaiveDate,
    /// Odometer reading at the pump
    pub mileage: i64,
    /// Fuel kind
    pub fuel_type: FuelType,
    /// Liters / price / total, already reconciled
    pub draft: FuelDraft,
    /// Station name
    pub gas_station: Option<String>,
    /// Whether the tank was filled completely
    pub is_full_tank: bool,
    /// Free-form notes
    pub notes: Option<String>,
}

fn validate_amount(amount: f64) -> Result<f64> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(amount)
}

/// Lists a car's fill-ups, newest first.
///
/// This order is the input contract of [`crate::core::economy`].
pub async fn list_fuel_records(
    db: &DatabaseConnection,
    car_id: i64,
) -> Result<Vec<fuel_record::Model>> {
    FuelRecord::find()
        .filter(fuel_record::Column::CarId.eq(car_id))
        .order_by_desc(fuel_record::Column::DateFilled)
        .order_by_desc(fuel_record::Column::Mileage)
        .order_by_desc(fuel_record::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Logs a fill-up on one of the owner's cars and returns the car's refreshed history.
#[instrument(skip(db, new_record))]
pub async fn create_fuel_record(
    db: &DatabaseConnection,
    owner_id: &str,
    car_id: i64,
    new_record: NewFuelRecord,
) -> Result<Vec<fuel_record::Model>> {
    if new_record.mileage < 0 {
        return Err(Error::InvalidMileage {
            mileage: new_record.mileage,
        });
    }
    let liters = validate_amount(new_record.draft.liters)?;
    if liters == 0.0 {
        return Err(Error::InvalidAmount { amount: liters });
    }
    let cost_per_liter = validate_amount(new_record.draft.cost_per_liter)?;
    let total_cost = validate_amount(new_record.draft.total_cost)?;

    let car = require_owned_car(db, owner_id, car_id).await?;

    let record = fuel_record::ActiveModel {
        car_id: Set(car.id),
        date_filled: Set(new_record.date_filled),
        mileage: Set(new_record.mileage),
        fuel_type: Set(new_record.fuel_type.as_str().to_string()),
        liters: Set(liters),
        cost_per_liter: Set(cost_per_liter),
        total_cost: Set(total_cost),
        gas_station: Set(new_record.gas_station),
        is_full_tank: Set(new_record.is_full_tank),
        notes: Set(new_record.notes),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(record_id = record.id, car_id = car.id, liters, "Logged fill-up");

    list_fuel_records(db, car.id).await
}
