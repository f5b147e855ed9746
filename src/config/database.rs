//! Database configuration module for `GarageBuddy`.
//!
//! This module handles the store connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the foreign keys (including the cascading deletes from cars to their records) always
//! match the Rust structs.

use crate::entities::{Car, FuelRecord, MaintenanceRecord, MaintenanceType};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema};
use tracing::{debug, info, instrument};

/// Establishes a connection to the store at `database_url`.
///
/// The URL is required configuration (see [`crate::config::settings::Settings`]); there is
/// no silent fallback to a local file.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database");
    let db = Database::connect(database_url).await?;
    info!("Database connection established");
    Ok(db)
}

/// Creates all tables if they do not exist yet.
///
/// Parent tables (cars, maintenance types) are created before the record tables that
/// reference them.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    create_table_for(db, Car).await?;
    create_table_for(db, MaintenanceType).await?;
    create_table_for(db, MaintenanceRecord).await?;
    create_table_for(db, FuelRecord).await?;
    info!("Database tables ensured");
    Ok(())
}

async fn create_table_for<E>(db: &DatabaseConnection, entity: E) -> Result<()>
where
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    db.execute(builder.build(&statement)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CarModel, FuelRecordModel, MaintenanceRecordModel, MaintenanceTypeModel};
    use sea_orm::QuerySelect;

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<CarModel> = Car::find().limit(1).all(&db).await?;
        let _: Vec<MaintenanceTypeModel> = MaintenanceType::find().limit(1).all(&db).await?;
        let _: Vec<MaintenanceRecordModel> = MaintenanceRecord::find().limit(1).all(&db).await?;
        let _: Vec<FuelRecordModel> = FuelRecord::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = create_connection("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;
        Ok(())
    }
}
