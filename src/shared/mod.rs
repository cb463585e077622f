//! Shared Module
//!
//! This module contains types that do not depend on the HTTP server:
//! configuration, input validation, and the validation error type. They
//! compile without the `ssr` feature.

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Input normalization and validation rules
pub mod validation;

/// Re-export commonly used types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
pub use error::SharedError;
