//! Error types for the database health probe.
//!
//! This module defines the probe's failure taxonomy and how driver errors
//! are classified into it. No variant here ever surfaces as an HTTP error
//! status: health endpoints always answer 200 and report failures in the
//! response body.

/// Failure kinds of the database health probe.
///
/// The three variants must stay distinguishable in the final response so
/// operators can tell "the database is down" from "the probe took too long"
/// from "our probe logic is broken". Each carries the underlying driver
/// error's message verbatim.
///
/// # Classification
///
/// - `Connection`: network/auth/target-missing failures — the database could
///   not be reached or refused us
/// - `Timeout`: the probe did not complete within its time budget
/// - `Unexpected`: anything else the driver raised (e.g., a malformed query,
///   an unexpected type)
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Connection-level operational failure (host unreachable, authentication
    /// rejected, database does not exist).
    #[error("connection failure: {0}")]
    Connection(String),

    /// The probe exceeded its time budget, either acquiring a connection or
    /// executing its queries.
    #[error("timeout: {0}")]
    Timeout(String),

    /// Any failure that does not look like a connectivity problem.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ProbeError {
    /// Underlying driver message, reported verbatim in the `error` field of
    /// the health response.
    pub fn detail(&self) -> &str {
        match self {
            ProbeError::Connection(msg) | ProbeError::Timeout(msg) | ProbeError::Unexpected(msg) => {
                msg
            }
        }
    }

    /// Human-readable summary for the `message` field of the health response.
    pub fn user_message(&self) -> &'static str {
        match self {
            ProbeError::Connection(_) => "Error connecting to the database",
            ProbeError::Timeout(_) => "Timed out while checking the database",
            ProbeError::Unexpected(_) => "Unexpected error while checking the database",
        }
    }
}

/// Classify a driver error into the probe taxonomy.
///
/// Transport-level errors (I/O, TLS, closed pool) are connection failures.
/// Server-reported errors count as connection failures when their SQLSTATE
/// says the session could not be established (see [`is_connection_sqlstate`]);
/// everything else is unexpected. Pool acquisition running out of time maps
/// to `Timeout`, keeping it distinct from a plain refused connection.
impl From<sqlx::Error> for ProbeError {
    fn from(err: sqlx::Error) -> Self {
        let detail = err.to_string();
        match err {
            sqlx::Error::PoolTimedOut => ProbeError::Timeout(detail),
            sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::PoolClosed => {
                ProbeError::Connection(detail)
            }
            sqlx::Error::Database(db) if is_connection_sqlstate(db.code().as_deref()) => {
                ProbeError::Connection(detail)
            }
            _ => ProbeError::Unexpected(detail),
        }
    }
}

/// Whether a SQLSTATE code reported by the server indicates a failure to
/// establish a usable session.
///
/// Covered classes:
/// - `08xxx`: connection exception
/// - `28xxx`: invalid authorization (bad user/password)
/// - `3Dxxx`: invalid catalog name (database does not exist)
/// - `57P03`: cannot_connect_now (server starting up or shutting down)
fn is_connection_sqlstate(code: Option<&str>) -> bool {
    match code {
        Some(code) => {
            code.starts_with("08")
                || code.starts_with("28")
                || code.starts_with("3D")
                || code == "57P03"
        }
        None => false,
    }
}
