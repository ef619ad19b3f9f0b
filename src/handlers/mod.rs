//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data
//! 2. Performs its check
//! 3. Returns an HTTP response (JSON, always status 200)

/// Health check endpoints
pub mod health;
/// Welcome endpoint
pub mod root;
