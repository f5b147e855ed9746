//! Car entity - A vehicle registered by a user.
//!
//! Each car belongs to exactly one Discord account (`owner_id`) and owns its
//! maintenance and fuel history. Deleting a car cascades to both.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Car database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    /// Unique identifier for the car
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Discord user ID of the owning account
    pub owner_id: String,
    /// Manufacturer (e.g., "Fiat", "Volkswagen")
    pub brand: String,
    /// Model name (e.g., "Uno", "Gol")
    pub model: String,
    /// Model year
    pub year: i32,
    /// Optional license plate
    pub license_plate: Option<String>,
    /// Optional body color
    pub color: Option<String>,
    /// Optional engine type (`"flex"`, `"diesel"`, ...)
    pub engine_type: Option<String>,
    /// Current odometer reading in km
    pub mileage: i64,
    /// When the car was registered
    pub created_at: DateTimeUtc,
}

impl Model {
    /// Human-readable label used in replies and autocomplete, e.g. `#3 Fiat Uno 2015`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("#{} {} {} {}", self.id, self.brand, self.model, self.year)
    }
}

/// Defines relationships between Car and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One car has many maintenance records
    #[sea_orm(has_many = "super::maintenance_record::Entity")]
    MaintenanceRecords,
    /// One car has many fuel records
    #[sea_orm(has_many = "super::fuel_record::Entity")]
    FuelRecords,
}

impl Related<super::maintenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRecords.def()
    }
}

impl Related<super::fuel_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FuelRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
