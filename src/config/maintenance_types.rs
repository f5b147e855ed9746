//! Maintenance type configuration loading from config.toml
//!
//! The maintenance types defined in config.toml are reference data. They are
//! inserted into the database at startup when a type with the same name is missing.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of maintenance types to seed
    #[serde(default)]
    pub maintenance_types: Vec<MaintenanceTypeConfig>,
}

/// Configuration for a single maintenance type
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct MaintenanceTypeConfig {
    /// Display name, unique across types
    pub name: String,
    /// Grouping category (e.g., "motor", "freios")
    pub category: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Default km between services
    #[serde(default)]
    pub interval_km: Option<i64>,
    /// Default months between services
    #[serde(default)]
    pub interval_months: Option<i32>,
}

/// Loads maintenance type configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

/// Parses maintenance type configuration from TOML text
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_maintenance_type_config() {
        let toml_str = r#"
            [[maintenance_types]]
            name = "Troca de óleo"
            category = "motor"
            interval_km = 10000
            interval_months = 12

            [[maintenance_types]]
            name = "Alinhamento"
            category = "suspensao"
            description = "Alinhamento e balanceamento"
            interval_km = 10000
        "#;

        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.maintenance_types.len(), 2);
        assert_eq!(config.maintenance_types[0].name, "Troca de óleo");
        assert_eq!(config.maintenance_types[0].interval_months, Some(12));
        assert_eq!(config.maintenance_types[1].interval_months, None);
        assert_eq!(
            config.maintenance_types[1].description.as_deref(),
            Some("Alinhamento e balanceamento")
        );
    }

    #[test]
    fn test_empty_config_has_no_types() {
        let config = parse_config("").unwrap();
        assert!(config.maintenance_types.is_empty());
    }

    #[test]
    fn test_missing_category_is_rejected() {
        let result = parse_config(
            r#"
            [[maintenance_types]]
            name = "Pneus"
            "#,
        );
        assert!(matches!(result, Err(Error::Config { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config("/nonexistent/garage-buddy/config.toml");
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
