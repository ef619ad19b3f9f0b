//! Shared application state for request handlers.

use crate::{config::Config, db::DbPool};
use std::sync::Arc;

/// Shared application state, cloneable across handlers.
///
/// The configuration is immutable after startup; the pool is the only
/// resource shared between in-flight requests and handles its own
/// synchronization internally.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub pool: DbPool,
}

impl AppState {
    /// Creates a new application state from the given configuration and pool.
    pub fn new(config: Config, pool: DbPool) -> Self {
        Self {
            config: Arc::new(config),
            pool,
        }
    }
}
