//! Unified error type for `GarageBuddy`.
//!
//! Every fallible operation in the crate returns [`Result`]. Store failures carry the
//! underlying `sea-orm` error so the store's own message reaches the user unchanged.

use thiserror::Error;

/// All errors that can occur in the application
#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what is wrong
        message: String,
    },

    /// Failure reported by the relational store
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// The car does not exist or is not owned by the caller
    #[error("Car not found: {car}")]
    CarNotFound {
        /// Id or label used for the lookup
        car: String,
    },

    /// No maintenance type matches the lookup
    #[error("Maintenance type not found: {maintenance_type}")]
    MaintenanceTypeNotFound {
        /// Name, or `#id`, used for the lookup
        maintenance_type: String,
    },

    /// A money or volume amount that is negative, NaN or infinite
    #[error("Invalid amount: {amount}")]
    InvalidAmount {
        /// The rejected amount
        amount: f64,
    },

    /// A negative odometer reading
    #[error("Invalid mileage: {mileage}")]
    InvalidMileage {
        /// The rejected mileage
        mileage: i64,
    },

    /// Any other rejected user input
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Description of what is wrong
        message: String,
    },

    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// String formatting error while building a reply
    #[error("Formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// Error raised by serenity / poise
    #[error("Serenity/Poise framework error: {0}")]
    Framework(Box<poise::serenity_prelude::Error>),
}

impl From<poise::serenity_prelude::Error> for Error {
    fn from(value: poise::serenity_prelude::Error) -> Self {
        Self::Framework(Box::new(value))
    }
}

/// Convenience `Result` alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_message_is_kept_verbatim() {
        let err: Error = sea_orm::DbErr::Custom("duplicate key value".to_string()).into();
        assert!(err.to_string().contains("duplicate key value"));
    }

    #[test]
    fn test_io_error_converts() {
        let err: Error = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_car_not_found_display() {
        let err = Error::CarNotFound {
            car: "#42".to_string(),
        };
        assert_eq!(err.to_string(), "Car not found: #42");
    }
}
