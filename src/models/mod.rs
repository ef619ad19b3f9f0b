//! Response body types returned to API clients.

/// Health and welcome response types
pub mod health;
