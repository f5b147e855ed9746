//! Maintenance type entity - Reference data describing a kind of service.
//!
//! Types carry the default interval policy used to project the next service when a
//! record is created. They are seeded from `config.toml` and are not user-owned.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Maintenance type database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "maintenance_types")]
pub struct Model {
    /// Unique identifier for the maintenance type
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name (e.g., "Troca de óleo")
    #[sea_orm(unique)]
    pub name: String,
    /// Grouping category (e.g., "motor", "freios")
    pub category: String,
    /// Optional longer description
    pub description: Option<String>,
    /// Default distance between services, in km
    pub default_interval_km: Option<i64>,
    /// Default time between services, in months
    pub default_interval_months: Option<i32>,
}

/// Defines relationships between `MaintenanceType` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One type is referenced by many records
    #[sea_orm(has_many = "super::maintenance_record::Entity")]
    MaintenanceRecords,
}

impl Related<super::maintenance_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
