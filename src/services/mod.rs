//! Core probe logic separated from HTTP handlers.

pub mod health_service;
