//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod car;
pub mod fuel_record;
pub mod maintenance_record;
pub mod maintenance_type;

// Re-export specific types to avoid conflicts
pub use car::{Column as CarColumn, Entity as Car, Model as CarModel};
pub use fuel_record::{Column as FuelRecordColumn, Entity as FuelRecord, Model as FuelRecordModel};
pub use maintenance_record::{
    Column as MaintenanceRecordColumn, Entity as MaintenanceRecord,
    Model as MaintenanceRecordModel,
};
pub use maintenance_type::{
    Column as MaintenanceTypeColumn, Entity as MaintenanceType, Model as MaintenanceTypeModel,
};
