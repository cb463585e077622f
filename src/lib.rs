//! Pokédex Server - Main Library
//!
//! Backend for the Pokédex classroom app: cookie-based sessions, double-submit
//! CSRF protection, and the user-facing auth flows (register, login, me,
//! logout), plus the favorites resource that sits behind both guards.
//!
//! # Module Structure
//!
//! - **`shared`** - Types usable from any context
//!   - Application configuration (`AppConfig`)
//!   - Input validation and email normalization
//!   - Shared error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and router
//!   - Token codec, cookie policy, CSRF token generation
//!   - Session and CSRF guards
//!   - Credential store (PostgreSQL or in-memory)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary.
//!
//! # Usage
//!
//! ```rust,no_run
//! use pokedex_server::backend::server::init::create_app;
//! use pokedex_server::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Request Pipeline
//!
//! Every guarded request passes through the session guard first and then,
//! for mutating methods, through the CSRF guard. Register and login are the
//! only mutating routes outside the pipeline.

/// Shared types and utilities
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
