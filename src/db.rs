//! Database connection pool management.
//!
//! This module builds the process-wide PostgreSQL connection pool from the
//! discrete configuration values (host, port, database, user, password).

use crate::config::Config;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{Pool, Postgres};

/// Type alias for PostgreSQL connection pool.
///
/// Instead of writing `Pool<Postgres>` everywhere, we can use `DbPool`.
pub type DbPool = Pool<Postgres>;

/// Create the PostgreSQL connection pool.
///
/// A connection pool maintains multiple database connections that can be reused across HTTP requests which is much more efficient than opening a new connection for each request. The pool is created once at startup and shared with handlers through application state.
///
/// # Arguments
///
/// * `config` - Application configuration holding the connection parameters
///
/// # Configuration
///
/// - 5 persistent connections kept alive for reuse (`min_connections`)
/// - Up to 10 additional transient connections under load (`max_connections` = 15)
/// - Connections are validated before each use (`test_before_acquire`)
/// - Acquisition is bounded by the health probe's time budget
///
/// The pool connects lazily: building it opens no socket. The first
/// acquisition does, so an unreachable database only surfaces when a
/// connection is actually requested.
pub fn create_pool(config: &Config) -> DbPool {
    let options = PgConnectOptions::new()
        .host(&config.postgres_host)
        .port(config.postgres_port)
        .database(&config.postgres_db)
        .username(&config.postgres_user)
        .password(&config.postgres_password);

    PgPoolOptions::new()
        .min_connections(5)
        .max_connections(15)
        .test_before_acquire(true)
        .acquire_timeout(config.db_health_timeout())
        .connect_lazy_with(options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            postgres_host: "127.0.0.1".to_string(),
            postgres_port: 1,
            postgres_db: "postgres".to_string(),
            postgres_user: "postgres".to_string(),
            postgres_password: "postgres".to_string(),
            server_port: 3000,
            db_health_timeout_secs: 1,
        }
    }

    #[tokio::test]
    async fn pool_construction_does_not_connect() {
        // Lazy pool: building against an unreachable address must succeed
        let pool = create_pool(&test_config());
        assert_eq!(pool.size(), 0);
    }

    #[tokio::test]
    async fn acquiring_from_unreachable_database_fails() {
        let pool = create_pool(&test_config());
        assert!(pool.acquire().await.is_err());
    }
}
