//! Health check response types.
//!
//! This module defines:
//! - `HealthState`: healthy/unhealthy enum used in every health body
//! - `WelcomeResponse`: body for the welcome endpoint
//! - `HealthResponse`: body for the application liveness endpoint
//! - `DbHealthResponse`: body for the database connectivity endpoint, with
//!   the assembler that merges configuration and probe outcome

use crate::{config::Config, error::ProbeError};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Service name reported by the health endpoints.
pub const SERVICE_NAME: &str = "docker-api-aws";

/// Service version reported by the health endpoints.
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Overall health state of the service or a dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    Unhealthy,
}

/// Response body for the welcome endpoint.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    /// Greeting message
    pub message: &'static str,

    /// Fixed process status marker
    pub status: &'static str,
}

impl WelcomeResponse {
    /// The constant welcome payload.
    pub fn new() -> Self {
        Self {
            message: "Welcome to Docker API AWS",
            status: "running",
        }
    }
}

/// Response body for the application liveness endpoint.
///
/// # JSON Example
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2026-08-07T10:00:00Z",
///   "service": "docker-api-aws",
///   "version": "1.0.0"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always healthy: this endpoint only proves the process is serving requests
    pub status: HealthState,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,

    /// Service identifier
    pub service: &'static str,

    /// Service version
    pub version: &'static str,
}

impl HealthResponse {
    /// Build the liveness payload with a fresh timestamp.
    pub fn new() -> Self {
        Self {
            status: HealthState::Healthy,
            timestamp: Utc::now(),
            service: SERVICE_NAME,
            version: SERVICE_VERSION,
        }
    }
}

/// Response body for the database connectivity endpoint.
///
/// The connection target (`host`, `port`, `database_name`) is copied from
/// configuration exactly as loaded, never validated. `port` is rendered as a
/// string on the wire. Optional fields are omitted from the JSON when absent.
///
/// # JSON Example (failure)
///
/// ```json
/// {
///   "database": "postgresql",
///   "host": "localhost",
///   "port": "5432",
///   "database_name": "postgres",
///   "timestamp": "2026-08-07T10:00:00Z",
///   "status": "unhealthy",
///   "connected": false,
///   "error": "connection refused",
///   "message": "Error connecting to the database"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct DbHealthResponse {
    /// Database kind, always "postgresql"
    pub database: &'static str,

    /// Configured database host
    pub host: String,

    /// Configured database port
    pub port: String,

    /// Configured database name
    pub database_name: String,

    /// Current server timestamp
    pub timestamp: DateTime<Utc>,

    /// Health verdict: healthy exactly when `connected` is true
    pub status: HealthState,

    /// Whether both probe queries completed without error
    pub connected: bool,

    /// Server version string, present only on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postgres_version: Option<String>,

    /// Underlying driver error message, present only on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Human-readable summary of the outcome
    pub message: &'static str,
}

impl DbHealthResponse {
    /// Assemble the response from configuration and the probe outcome.
    ///
    /// Handles every outcome exhaustively:
    ///
    /// - `Ok(version)`: healthy, connected, carries the server version
    /// - `Err(_)`: unhealthy, not connected, carries the driver error and a
    ///   summary message distinguishing the failure kind
    ///
    /// Probe failures never escape this endpoint as HTTP errors; they are
    /// folded into a normal response body here.
    pub fn from_outcome(config: &Config, outcome: Result<String, ProbeError>) -> Self {
        let (status, connected, postgres_version, error, message) = match outcome {
            Ok(version) => (
                HealthState::Healthy,
                true,
                Some(version),
                None,
                "Database connection successful",
            ),
            Err(err) => (
                HealthState::Unhealthy,
                false,
                None,
                Some(err.detail().to_string()),
                err.user_message(),
            ),
        };

        Self {
            database: "postgresql",
            host: config.postgres_host.clone(),
            port: config.postgres_port.to_string(),
            database_name: config.postgres_db.clone(),
            timestamp: Utc::now(),
            status,
            connected,
            postgres_version,
            error,
            message,
        }
    }
}
