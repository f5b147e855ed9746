//! Runtime settings read from the environment.
//!
//! The store URL and the Discord token are both required. Starting without either is a
//! configuration error, so `main` fails fast instead of running misconfigured.

use crate::errors::{Error, Result};
use std::path::PathBuf;

/// Environment variable holding the store connection URL
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";
/// Environment variable holding the Discord bot token
pub const DISCORD_TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";
/// Environment variable overriding the path of `config.toml`
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Settings needed to start the bot
#[derive(Clone)]
pub struct Settings {
    /// `SeaORM` connection URL (e.g. `sqlite://data/garage_buddy.sqlite?mode=rwc`)
    pub database_url: String,
    /// Discord bot token
    pub discord_token: String,
    /// Location of the reference-data file
    pub config_path: PathBuf,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &self.database_url)
            .field("discord_token", &"<redacted>")
            .field("config_path", &self.config_path)
            .finish()
    }
}

impl Settings {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the settings from an arbitrary key lookup.
    ///
    /// Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| Error::Config {
                    message: format!("{key} must be set"),
                })
        };

        Ok(Self {
            database_url: required(DATABASE_URL_VAR)?,
            discord_token: required(DISCORD_TOKEN_VAR)?,
            config_path: lookup(CONFIG_PATH_VAR)
                .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from),
        })
    }
}
