//! Middleware Module
//!
//! Request guards for the protected part of the API.
//!
//! - **`auth`** - Session middleware: verifies the `token` cookie and
//!   attaches the user id (401 on failure)
//! - **`csrf`** - CSRF guard: double-submit check on mutating methods
//!   (403 on failure)
//!
//! Both guards are thin wrappers over pure functions (`authenticate`,
//! `check_csrf`) so they can be tested without a router.
//!
//! # Ordering
//!
//! The session middleware always runs first. With `route_layer`, the
//! layer added last runs first:
//!
//! ```rust,ignore
//! router
//!     .route_layer(axum::middleware::from_fn(require_csrf))
//!     .route_layer(axum::middleware::from_fn_with_state(state, require_auth));
//! ```

pub mod auth;
pub mod csrf;

pub use auth::{authenticate, require_auth, AuthUser, AuthenticatedUser};
pub use csrf::{check_csrf, is_safe_method, require_csrf};
