//! Shared Error Types
//!
//! This module defines error types produced by input validation. They carry
//! only client-correctable failures; the backend maps them onto HTTP status
//! codes and stable error codes.
//!
//! # Error Categories
//!
//! - `ValidationError` - A request field failed a business rule (422)
//! - `InvalidId` - A path identifier is not a positive integer (400)
//!
//! # Usage
//!
//! ```rust
//! use pokedex_server::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "Invalid email");
//! assert_eq!(error.client_message(), "Invalid email");
//! ```
use thiserror::Error;

/// Validation failures shared by every caller of [`crate::shared::validation`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Identifier taken from a path segment is not usable
    #[error("Invalid id: {value}")]
    InvalidId {
        /// The raw value that was rejected
        value: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new invalid id error
    pub fn invalid_id(value: impl Into<String>) -> Self {
        Self::InvalidId {
            value: value.into(),
        }
    }

    /// Message safe to show to the client.
    ///
    /// Unlike `Display`, this omits the field name so the text matches what
    /// the client form shows next to the input.
    pub fn client_message(&self) -> String {
        match self {
            Self::ValidationError { message, .. } => message.clone(),
            Self::InvalidId { .. } => "Invalid id".to_string(),
        }
    }
}
