//! Discord interaction handlers
//!
//! This module provides handlers for Discord interactions such as autocomplete.

/// Autocomplete handlers for cars, maintenance types and fuel/engine types
pub mod autocomplete;
