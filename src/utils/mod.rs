//! Utilities for logging setup

/// Tracing subscriber configuration
pub mod logger;
