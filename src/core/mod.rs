//! Core business logic - framework-agnostic car, maintenance and fuel operations.
//!
//! The calculators (`due_status`, `schedule`, `economy`, `fuel_draft`) are pure. The
//! stores (`car`, `maintenance`, `fuel`, `dashboard`) talk to the database and return
//! freshly fetched data after every mutation.

/// Car registration, edits and removal
pub mod car;
/// Maintenance alerts across a user's cars
pub mod dashboard;
/// Overdue / due-soon classification
pub mod due_status;
/// Fuel consumption and spend statistics
pub mod economy;
/// Fill-up logging and history
pub mod fuel;
/// Liters / price / total reconciliation
pub mod fuel_draft;
/// Maintenance types and service records
pub mod maintenance;
/// Next-service projection
pub mod schedule;
