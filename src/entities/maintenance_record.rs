//! Maintenance record entity - A service performed on a car.
//!
//! Records are immutable once created. `next_service_km` and `next_service_date` are
//! projected at creation time and never recomputed from the type afterwards.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Maintenance record database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "maintenance_records")]
pub struct Model {
    /// Unique identifier for the record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the car that was serviced
    pub car_id: i64,
    /// ID of the maintenance type performed
    pub maintenance_type_id: i64,
    /// Day the service was performed
    pub date_performed: Date,
    /// Odometer reading at service time
    pub mileage_at_service: i64,
    /// Amount paid, in BRL
    pub cost: f64,
    /// Odometer target for the next service (`None` or 0 means no km target)
    pub next_service_km: Option<i64>,
    /// Date target for the next service
    pub next_service_date: Option<Date>,
    /// Workshop or provider name
    pub service_provider: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
    /// When the record was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `MaintenanceRecord` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each record belongs to one car; removed together with it
    #[sea_orm(
        belongs_to = "super::car::Entity",
        from = "Column::CarId",
        to = "super::car::Column::Id",
        on_delete = "Cascade"
    )]
    Car,
    /// Each record references one maintenance type
    #[sea_orm(
        belongs_to = "super::maintenance_type::Entity",
        from = "Column::MaintenanceTypeId",
        to = "super::maintenance_type::Column::Id"
    )]
    MaintenanceType,
}

impl Related<super::car::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Car.def()
    }
}

impl Related<super::maintenance_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
