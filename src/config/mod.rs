/// Database configuration and connection management
pub mod database;

/// Maintenance type reference data loaded from config.toml
pub mod maintenance_types;

/// Required runtime settings read from the environment
pub mod settings;
