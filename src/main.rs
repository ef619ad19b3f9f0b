//! Docker API AWS - Main Application Entry Point
//!
//! This is a minimal REST API server exposing a welcome endpoint, an
//! application healthcheck, and a PostgreSQL connectivity healthcheck.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries, pooled connections)
//! - **Format**: JSON responses, always HTTP 200
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create the database connection pool (lazy, no socket opened yet)
//! 3. Build HTTP router with routes and middleware
//! 4. Start server on configured port
//! 5. On Ctrl+C/SIGTERM: drain connections, close the pool, exit

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

use axum::{Router, routing::get};
use state::AppState;
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool once for the process lifetime.
    // Connecting is lazy: an unreachable database does not prevent startup,
    // it is reported by /health/db instead.
    let pool = db::create_pool(&config);
    tracing::info!(
        host = %config.postgres_host,
        port = config.postgres_port,
        database = %config.postgres_db,
        "Database pool created"
    );

    let server_port = config.server_port;
    let app = app(AppState::new(config, pool.clone()));

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{server_port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Serve HTTP requests concurrently until a shutdown signal arrives
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Explicit teardown once in-flight requests have drained
    pool.close().await;
    tracing::info!("Connection pool closed");

    Ok(())
}

/// Build the HTTP router.
///
/// # Routes
///
/// - `GET /` - welcome message
/// - `GET /health` - application liveness check
/// - `GET /health/db` - database connectivity check
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root::welcome))
        .route("/health", get(handlers::health::health_check))
        .route("/health/db", get(handlers::health::database_health_check))
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share configuration and pool with all handlers via State extraction
        .with_state(state)
}

/// Resolve when the process receives Ctrl+C or SIGTERM.
///
/// Used by `axum::serve` to stop accepting new connections and drain the
/// existing ones before returning.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::{DateTime, Utc};
    use serde_json::Value;
    use tower::ServiceExt;

    /// State wired to a database port nothing listens on.
    fn unreachable_state() -> AppState {
        let config = Config {
            postgres_host: "127.0.0.1".to_string(),
            postgres_port: 1,
            postgres_db: "postgres".to_string(),
            postgres_user: "postgres".to_string(),
            postgres_password: "postgres".to_string(),
            server_port: 3000,
            db_health_timeout_secs: 1,
        };
        let pool = db::create_pool(&config);
        AppState::new(config, pool)
    }

    async fn get_json(app: Router, path: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    #[tokio::test]
    async fn welcome_returns_the_constant_payload() {
        let (status, body) = get_json(app(unreachable_state()), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            serde_json::json!({
                "message": "Welcome to Docker API AWS",
                "status": "running"
            })
        );
    }

    #[tokio::test]
    async fn health_reports_healthy_with_a_fresh_timestamp() {
        let before = Utc::now();
        let (status, body) = get_json(app(unreachable_state()), "/health").await;
        let after = Utc::now();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "docker-api-aws");
        assert_eq!(body["version"], "1.0.0");

        let timestamp: DateTime<Utc> = body["timestamp"]
            .as_str()
            .unwrap()
            .parse()
            .expect("timestamp must be ISO-8601");
        assert!(timestamp >= before && timestamp <= after);
    }

    #[tokio::test]
    async fn repeated_health_calls_differ_only_in_timestamp() {
        let state = unreachable_state();
        let (_, mut first) = get_json(app(state.clone()), "/health").await;
        let (_, mut second) = get_json(app(state), "/health").await;

        first.as_object_mut().unwrap().remove("timestamp");
        second.as_object_mut().unwrap().remove("timestamp");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn db_health_reports_unreachable_database_in_the_body() {
        let (status, body) = get_json(app(unreachable_state()), "/health/db").await;

        // Probe failures never surface as HTTP errors
        assert_eq!(status, StatusCode::OK);

        assert_eq!(body["database"], "postgresql");
        assert_eq!(body["host"], "127.0.0.1");
        assert_eq!(body["port"], "1");
        assert_eq!(body["database_name"], "postgres");
        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["connected"], false);
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert!(body.get("postgres_version").is_none());

        // A refused connection is reported as a connection failure, or as a
        // timeout when the pool spends the whole budget retrying it
        let message = body["message"].as_str().unwrap();
        assert!(
            message == "Error connecting to the database"
                || message == "Timed out while checking the database",
            "unexpected message: {message}"
        );
    }
}
