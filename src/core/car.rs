//! Car business logic - registration, edits and removal of a user's cars.
//!
//! Every operation is scoped to the owning Discord account. Mutations return the
//! refreshed list of the owner's cars, so callers always render what the store holds
//! rather than patching local state.

use crate::{
    entities::{Car, car},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use std::{fmt, str::FromStr};
use tracing::{info, instrument};

/// Engine / fuel system of a car.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineType {
    /// Gasoline only
    Gasolina,
    /// Ethanol only
    Etanol,
    /// Gasoline or ethanol
    Flex,
    /// Diesel
    Diesel,
    /// Hybrid
    Hibrido,
    /// Battery electric
    Eletrico,
}

impl EngineType {
    /// Every accepted engine type, in display order
    pub const ALL: [Self; 6] = [
        Self::Gasolina,
        Self::Etanol,
        Self::Flex,
        Self::Diesel,
        Self::Hibrido,
        Self::Eletrico,
    ];

    /// Stored representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gasolina => "gasolina",
            Self::Etanol => "etanol",
            Self::Flex => "flex",
            Self::Diesel => "diesel",
            Self::Hibrido => "hibrido",
            Self::Eletrico => "eletrico",
        }
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|engine| engine.as_str() == wanted)
            .ok_or_else(|| Error::InvalidInput {
                message: format!("unknown engine type '{s}'"),
            })
    }
}

/// Values entered when registering a car.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCar {
    /// Manufacturer
    pub brand: String,
    /// Model name
    pub model: String,
    /// Model year
    pub year: i32,
    /// Optional license plate
    pub license_plate: Option<String>,
    /// Optional color
    pub color: Option<String>,
    /// Optional engine type
    pub engine_type: Option<String>,
    /// Current odometer reading
    pub mileage: i64,
}

/// Fields changed by an edit; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarChanges {
    /// New manufacturer
    pub brand: Option<String>,
    /// New model name
    pub model: Option<String>,
    /// New model year
    pub year: Option<i32>,
    /// New license plate
    pub license_plate: Option<String>,
    /// New color
    pub color: Option<String>,
    /// New engine type
    pub engine_type: Option<String>,
    /// New odometer reading
    pub mileage: Option<i64>,
}

impl CarChanges {
    /// True when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.model.is_none()
            && self.year.is_none()
            && self.license_plate.is_none()
            && self.color.is_none()
            && self.engine_type.is_none()
            && self.mileage.is_none()
    }
}

/// Longest accepted brand or model, in characters
pub const MAX_NAME_CHARS: usize = 40;

fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidInput {
            message: format!("{field} cannot be empty"),
        });
    }
    if trimmed.chars().count() > MAX_NAME_CHARS {
        return Err(Error::InvalidInput {
            message: format!("{field} must be at most {MAX_NAME_CHARS} characters"),
        });
    }
    Ok(trimmed.to_string())
}

fn engine_text(value: Option<String>) -> Result<Option<String>> {
    optional_text(value)
        .map(|v| v.parse::<EngineType>().map(|engine| engine.as_str().to_string()))
        .transpose()
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_mileage(mileage: i64) -> Result<i64> {
    if mileage < 0 {
        return Err(Error::InvalidMileage { mileage });
    }
    Ok(mileage)
}

fn validate_year(year: i32) -> Result<i32> {
    if !(1900..=2100).contains(&year) {
        return Err(Error::InvalidInput {
            message: format!("year {year} is out of range"),
        });
    }
    Ok(year)
}

/// Lists the owner's cars, most recently registered first.
pub async fn list_cars(db: &DatabaseConnection, owner_id: &str) -> Result<Vec<car::Model>> {
    Car::find()
        .filter(car::Column::OwnerId.eq(owner_id))
        .order_by_desc(car::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a car by ID, only if it belongs to `owner_id`.
pub async fn get_owned_car(
    db: &DatabaseConnection,
    owner_id: &str,
    car_id: i64,
) -> Result<Option<car::Model>> {
    Car::find_by_id(car_id)
        .filter(car::Column::OwnerId.eq(owner_id))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Like [`get_owned_car`] but a missing car is an error.
pub async fn require_owned_car(
    db: &DatabaseConnection,
    owner_id: &str,
    car_id: i64,
) -> Result<car::Model> {
    get_owned_car(db, owner_id, car_id)
        .await?
        .ok_or_else(|| Error::CarNotFound {
            car: format!("#{car_id}"),
        })
}

/// Resolves a car reference typed by the user.
///
/// Accepts the autocomplete label (`#3 Fiat Uno 2015`), a bare `#3` or `3`, or a
/// case-insensitive `brand model` match among the owner's cars.
pub async fn find_owned_car_by_label(
    db: &DatabaseConnection,
    owner_id: &str,
    label: &str,
) -> Result<car::Model> {
    let label = label.trim();
    let leading = label.split_whitespace().next().unwrap_or_default();
    if let Ok(car_id) = leading.trim_start_matches('#').parse::<i64>() {
        return require_owned_car(db, owner_id, car_id).await;
    }

    let wanted = label.to_lowercase();
    list_cars(db, owner_id)
        .await?
        .into_iter()
        .find(|c| {
            format!("{} {}", c.brand, c.model).to_lowercase() == wanted
                || c.label().to_lowercase() == wanted
        })
        .ok_or_else(|| Error::CarNotFound {
            car: label.to_string(),
        })
}

/// Registers a new car for `owner_id` and returns the owner's refreshed list.
#[instrument(skip(db, new_car))]
pub async fn create_car(
    db: &DatabaseConnection,
    owner_id: &str,
    new_car: NewCar,
) -> Result<Vec<car::Model>> {
    let car = car::ActiveModel {
        owner_id: Set(owner_id.to_string()),
        brand: Set(required_text("brand", &new_car.brand)?),
        model: Set(required_text("model", &new_car.model)?),
        year: Set(validate_year(new_car.year)?),
        license_plate: Set(optional_text(new_car.license_plate)),
        color: Set(optional_text(new_car.color)),
        engine_type: Set(engine_text(new_car.engine_type)?),
        mileage: Set(validate_mileage(new_car.mileage)?),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let inserted = car.insert(db).await?;
    info!(car_id = inserted.id, "Registered car");

    list_cars(db, owner_id).await
}

/// Applies `changes` to one of the owner's cars and returns the refreshed list.
#[instrument(skip(db, changes))]
pub async fn update_car(
    db: &DatabaseConnection,
    owner_id: &str,
    car_id: i64,
    changes: CarChanges,
) -> Result<Vec<car::Model>> {
    if changes.is_empty() {
        return Err(Error::InvalidInput {
            message: "no field to update".to_string(),
        });
    }

    let existing = require_owned_car(db, owner_id, car_id).await?;
    let mut active_model: car::ActiveModel = existing.into();

    if let Some(brand) = changes.brand {
        active_model.brand = Set(required_text("brand", &brand)?);
    }
    if let Some(model) = changes.model {
        active_model.model = Set(required_text("model", &model)?);
    }
    if let Some(year) = changes.year {
        active_model.year = Set(validate_year(year)?);
    }
    if changes.license_plate.is_some() {
        active_model.license_plate = Set(optional_text(changes.license_plate));
    }
    if changes.color.is_some() {
        active_model.color = Set(optional_text(changes.color));
    }
    if changes.engine_type.is_some() {
        active_model.engine_type = Set(engine_text(changes.engine_type)?);
    }
    if let Some(mileage) = changes.mileage {
        active_model.mileage = Set(validate_mileage(mileage)?);
    }

    active_model.update(db).await?;
    info!(car_id, "Updated car");

    list_cars(db, owner_id).await
}

/// Deletes one of the owner's cars and returns the refreshed list.
///
/// Maintenance and fuel records go with it through the `ON DELETE CASCADE` foreign keys.
#[instrument(skip(db))]
pub async fn delete_car(
    db: &DatabaseConnection,
    owner_id: &str,
    car_id: i64,
) -> Result<Vec<car::Model>> {
    let result = Car::delete_many()
        .filter(car::Column::Id.eq(car_id))
        .filter(car::Column::OwnerId.eq(owner_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::CarNotFound {
            car: format!("#{car_id}"),
        });
    }
    info!(car_id, "Deleted car");

    list_cars(db, owner_id).await
}
