//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;
use std::time::Duration;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// All variables are optional:
///
/// - `POSTGRES_HOST`: database host, defaults to "localhost"
/// - `POSTGRES_PORT`: database port, defaults to 5432
/// - `POSTGRES_DB`: database name, defaults to "postgres"
/// - `POSTGRES_USER`: database user, defaults to "postgres"
/// - `POSTGRES_PASSWORD`: database password, defaults to "postgres"
/// - `SERVER_PORT`: HTTP server port, defaults to 3000
/// - `DB_HEALTH_TIMEOUT_SECS`: time budget for the database health probe, defaults to 5
///
/// Configuration is read once at startup and never changes for the process
/// lifetime, so it can be shared across handlers without synchronization.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_postgres_host")]
    pub postgres_host: String,

    #[serde(default = "default_postgres_port")]
    pub postgres_port: u16,

    #[serde(default = "default_postgres_db")]
    pub postgres_db: String,

    #[serde(default = "default_postgres_user")]
    pub postgres_user: String,

    #[serde(default = "default_postgres_password")]
    pub postgres_password: String,

    #[serde(default = "default_server_port")]
    pub server_port: u16,

    #[serde(default = "default_db_health_timeout_secs")]
    pub db_health_timeout_secs: u64,
}

/// Default database host if POSTGRES_HOST is not set.
fn default_postgres_host() -> String {
    "localhost".to_string()
}

/// Default database port if POSTGRES_PORT is not set.
fn default_postgres_port() -> u16 {
    5432
}

/// Default database name if POSTGRES_DB is not set.
fn default_postgres_db() -> String {
    "postgres".to_string()
}

/// Default database user if POSTGRES_USER is not set.
fn default_postgres_user() -> String {
    "postgres".to_string()
}

/// Default database password if POSTGRES_PASSWORD is not set.
fn default_postgres_password() -> String {
    "postgres".to_string()
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_server_port() -> u16 {
    3000
}

/// Default probe time budget if DB_HEALTH_TIMEOUT_SECS is not set.
fn default_db_health_timeout_secs() -> u64 {
    5
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable value cannot be parsed
    /// into the expected type (e.g., a non-numeric POSTGRES_PORT).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: postgres_host -> POSTGRES_HOST
        envy::from_env::<Config>()
    }

    /// Time budget for the database health probe.
    pub fn db_health_timeout(&self) -> Duration {
        Duration::from_secs(self.db_health_timeout_secs)
    }
}
