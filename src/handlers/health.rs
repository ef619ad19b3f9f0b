//! Health check endpoints for service monitoring.

use crate::{
    models::health::{DbHealthResponse, HealthResponse},
    services::health_service,
    state::AppState,
};
use axum::{Json, extract::State};

/// Application liveness handler.
///
/// Always reports healthy: this endpoint only proves the process is up and
/// able to answer HTTP. It cannot observe any internal fault.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "timestamp": "2026-08-07T10:00:00Z",
///   "service": "docker-api-aws",
///   "version": "1.0.0"
/// }
/// ```
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::new())
}

/// Database connectivity handler.
///
/// Runs the database probe against the shared pool and folds the outcome
/// into the response body. The HTTP status is 200 whatever the probe finds;
/// only the body's `status` and `connected` fields signal health. Monitoring
/// systems should inspect the body, not the status code.
///
/// # Response (200 OK, database reachable)
///
/// ```json
/// {
///   "database": "postgresql",
///   "host": "localhost",
///   "port": "5432",
///   "database_name": "postgres",
///   "timestamp": "2026-08-07T10:00:00Z",
///   "status": "healthy",
///   "connected": true,
///   "postgres_version": "PostgreSQL 16.3 ...",
///   "message": "Database connection successful"
/// }
/// ```
///
/// # Response (200 OK, database unreachable)
///
/// Same shape with `status: "unhealthy"`, `connected: false`, and `error`
/// in place of `postgres_version`.
pub async fn database_health_check(State(state): State<AppState>) -> Json<DbHealthResponse> {
    let outcome =
        health_service::probe_database(&state.pool, state.config.db_health_timeout()).await;

    if let Err(ref err) = outcome {
        tracing::warn!(error = %err, "database health check failed");
    }

    Json(DbHealthResponse::from_outcome(&state.config, outcome))
}
