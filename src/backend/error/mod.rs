//! Backend Error Module
//!
//! This module defines the error taxonomy of the HTTP API and its
//! conversion into responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and its code/status mapping
//! └── conversion.rs - IntoResponse implementation
//! ```
//!
//! # Propagation
//!
//! Validation and conflict errors are created in handlers and returned with
//! `?`. Guard failures short-circuit before any handler runs. Store, hashing
//! and signing failures are converted into `BackendError::Internal` and only
//! their log line carries details.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use conversion::ErrorBody;
pub use types::BackendError;
