//! Fuel record entity - A single fill-up.
//!
//! `total_cost`, `liters` and `cost_per_liter` are kept consistent by
//! [`crate::core::fuel_draft::FuelDraft`] before the row is written.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fuel record database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fuel_records")]
pub struct Model {
    /// Unique identifier for the fill-up
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the car that was filled
    pub car_id: i64,
    /// Day of the fill-up
    pub date_filled: Date,
    /// Odometer reading at the pump
    pub mileage: i64,
    /// Fuel kind: `"gasolina"`, `"etanol"`, `"diesel"` or `"gnv"`
    pub fuel_type: String,
    /// Volume pumped
    pub liters: f64,
    /// Price per liter, in BRL
    pub cost_per_liter: f64,
    /// Amount paid, in BRL
    pub total_cost: f64,
    /// Station name
    pub gas_station: Option<String>,
    /// Whether the tank was filled completely
    pub is_full_tank: bool,
    /// Free-form notes
    pub notes: Option<String>,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `FuelRecord` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each fill-up belongs to one car; removed together with it
    #[sea_orm(
        belongs_to = "super::car::Entity",
        from = "Column::CarId",
        to = "super::car::Column::Id",
        on_delete = "Cascade"
    )]
    Car,
}

impl Related<super::car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
