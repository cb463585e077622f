/**
 * Backend Error Types
 *
 * This module defines the error taxonomy of the HTTP surface. Every variant
 * maps to one HTTP status and one stable machine-readable code; clients
 * branch on the code, never on the message.
 *
 * # Error Categories
 *
 * ## Client-correctable
 *
 * - `Validation` - 422, request data fails a business rule
 * - `InvalidId` - 400, path identifier is malformed
 *
 * ## Identity
 *
 * - `Unauthorized` - 401, session cookie missing or invalid
 * - `InvalidCredentials` - 401, login rejected (unknown email and wrong
 *   password are indistinguishable)
 * - `CsrfInvalid` - 403, double-submit mismatch
 *
 * ## State
 *
 * - `DuplicateEmail` / `DuplicateKey` - 409
 * - `UserNotFound` / `NotFound` - 404
 *
 * ## Internal
 *
 * - `Internal` - 500, details are logged and never rendered
 */

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use thiserror::Error;

use crate::backend::auth::password::PasswordError;
use crate::backend::auth::sessions::TokenError;
use crate::backend::auth::users::StoreError;
use crate::shared::SharedError;

/// Message of the 401 returned when no session cookie is present
pub const SESSION_MISSING: &str = "Session missing";
/// Message of the 401 returned for any unusable session cookie
pub const SESSION_INVALID: &str = "Session invalid";

/// Backend-specific error types
///
/// Produced by guards and handlers and rendered by the single
/// `IntoResponse` implementation in `conversion`.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Input failed a business rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// Path identifier is not a positive integer
    #[error("Invalid id")]
    InvalidId,

    /// Email already registered
    #[error("Email already registered")]
    DuplicateEmail,

    /// Resource already present (favorites)
    #[error("{0}")]
    DuplicateKey(String),

    /// Session cookie missing or unusable
    #[error("Unauthorized: {0}")]
    Unauthorized(&'static str),

    /// Login rejected
    #[error("Invalid login")]
    InvalidCredentials,

    /// CSRF cookie and header do not match
    #[error("CSRF token invalid")]
    CsrfInvalid,

    /// Valid session, but the principal record is gone
    #[error("User does not exist")]
    UserNotFound,

    /// Route or resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure; the inner message is for logs only
    #[error("Internal error: {0}")]
    Internal(String),
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidId => StatusCode::BAD_REQUEST,
            Self::DuplicateEmail | Self::DuplicateKey(_) => StatusCode::CONFLICT,
            Self::Unauthorized(_) | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::CsrfInvalid => StatusCode::FORBIDDEN,
            Self::UserNotFound | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidId => "INVALID_ID",
            Self::DuplicateEmail => "DUPLICATE_EMAIL",
            Self::DuplicateKey(_) => "DUPLICATE_KEY",
            Self::Unauthorized(_) => "UNAUTHORIZED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::CsrfInvalid => "CSRF_INVALID",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the client-facing message
    ///
    /// Internal errors always yield the same generic text.
    pub fn message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Unauthorized(message) => (*message).to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        match &err {
            SharedError::ValidationError { field, .. } => {
                tracing::debug!("Validation failed on field '{}'", field);
                Self::validation(err.client_message())
            }
            SharedError::InvalidId { value } => {
                tracing::debug!("Rejected id '{}'", value);
                Self::InvalidId
            }
        }
    }
}

impl From<StoreError> for BackendError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail(_) => Self::DuplicateEmail,
            StoreError::NotFound => Self::UserNotFound,
            StoreError::Database(e) => Self::Internal(format!("database: {e}")),
        }
    }
}

impl From<PasswordError> for BackendError {
    fn from(err: PasswordError) -> Self {
        Self::Internal(format!("password hashing: {err}"))
    }
}

impl From<JsonRejection> for BackendError {
    fn from(err: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", err.body_text());
        Self::validation("Invalid request body")
    }
}

impl From<TokenError> for BackendError {
    fn from(err: TokenError) -> Self {
        match err {
            TokenError::Invalid => Self::Unauthorized(SESSION_INVALID),
            TokenError::Signing(e) => Self::Internal(format!("token signing: {e}")),
        }
    }
}
