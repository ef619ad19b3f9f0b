//! Database probe - Core logic of the database healthcheck.
//!
//! The probe answers one question: can we acquire a live connection and get
//! two round trips out of it? Its outcome is a tagged result that the
//! response assembler folds into the health body.
//!
//! # Probe sequence
//!
//! 1. Acquire one connection from the shared pool
//! 2. `SELECT version()` - retrieve the server version string
//! 3. `SELECT 1` - confirm the connection is still responsive
//!
//! The whole sequence runs under an explicit time budget. No retries.

use crate::{db::DbPool, error::ProbeError};
use std::time::Duration;
use tokio::time::timeout;

/// Probe the database and return its version string on success.
///
/// # Arguments
///
/// * `pool` - Shared connection pool
/// * `budget` - Maximum wall-clock time for the entire probe
///
/// # Errors
///
/// - `ProbeError::Connection`: the database could not be reached or refused us
/// - `ProbeError::Timeout`: the probe did not finish within `budget`
/// - `ProbeError::Unexpected`: the driver failed in any other way
pub async fn probe_database(pool: &DbPool, budget: Duration) -> Result<String, ProbeError> {
    match timeout(budget, run_probe(pool)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(ProbeError::Timeout(format!(
            "database health check did not complete within {}s",
            budget.as_secs()
        ))),
    }
}

/// Acquire a connection and run both round-trip queries.
///
/// The `PoolConnection` guard returns the connection to the pool when it goes
/// out of scope, on every exit path.
async fn run_probe(pool: &DbPool) -> Result<String, ProbeError> {
    let mut conn = pool.acquire().await?;

    let version: String = sqlx::query_scalar("SELECT version()")
        .fetch_one(&mut *conn)
        .await?;

    sqlx::query("SELECT 1").execute(&mut *conn).await?;

    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, db};

    fn unreachable_config() -> Config {
        Config {
            // Port 1 is never a PostgreSQL server; connection is refused immediately
            postgres_host: "127.0.0.1".to_string(),
            postgres_port: 1,
            postgres_db: "postgres".to_string(),
            postgres_user: "postgres".to_string(),
            postgres_password: "postgres".to_string(),
            server_port: 3000,
            db_health_timeout_secs: 2,
        }
    }

    #[tokio::test]
    async fn probe_against_unreachable_host_fails() {
        let config = unreachable_config();
        let pool = db::create_pool(&config);

        let outcome = probe_database(&pool, config.db_health_timeout()).await;

        // Depending on how fast the refusal propagates through the pool this
        // classifies as Connection or Timeout, never Unexpected
        match outcome {
            Err(ProbeError::Connection(detail)) | Err(ProbeError::Timeout(detail)) => {
                assert!(!detail.is_empty());
            }
            other => panic!("expected connection or timeout failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn exhausted_budget_reports_timeout() {
        let config = unreachable_config();
        let pool = db::create_pool(&config);

        // Zero budget: the timeout fires before the probe can even fail
        let outcome = probe_database(&pool, Duration::from_secs(0)).await;

        match outcome {
            Err(ProbeError::Timeout(detail)) => {
                assert!(detail.contains("did not complete"));
            }
            other => panic!("expected timeout, got {other:?}"),
        }
    }
}
