//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `RECENT_BUSINESSES_LIMIT` (optional): size of the recent list, defaults to 5
/// - `NOTIFICATION_CAPACITY` (optional): pending notifications kept, defaults to 20
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_recent_limit")]
    pub recent_businesses_limit: i64,

    #[serde(default = "default_notification_capacity")]
    pub notification_capacity: usize,
}

fn default_port() -> u16 {
    3000
}

fn default_recent_limit() -> i64 {
    5
}

fn default_notification_capacity() -> usize {
    20
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if present.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing or a value cannot be parsed.
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();

        envy::from_env::<Config>()
    }

    /// Build configuration from an explicit list of variables.
    #[cfg(test)]
    pub fn from_iter<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }
}
