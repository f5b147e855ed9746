//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Car management commands
pub mod car;

/// Maintenance alert overview
pub mod dashboard;

/// Fuel logging and statistics commands
pub mod fuel;

/// General utility commands
pub mod general;

/// Maintenance logging commands
pub mod maintenance;

/// Parsing and formatting helpers
pub mod utils;

// Export commands
pub use car::*;
pub use dashboard::*;
pub use fuel::*;
pub use general::*;
pub use maintenance::*;
