//! Backend Module
//!
//! Server-side code for the Pokédex app: the Axum HTTP server, the session
//! and CSRF guards, the auth handlers and the favorites resource.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, store selection
//! - **`routes`** - Route groups and router assembly
//! - **`auth`** - Token codec, cookie policy, CSRF tokens, credential store,
//!   auth handlers
//! - **`middleware`** - Session middleware and CSRF guard
//! - **`favorites`** - Favorites resource behind both guards
//! - **`error`** - Error taxonomy and its JSON rendering
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Authentication
//! ├── middleware/     - Request guards
//! ├── favorites/      - Favorites handlers
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the credential store behind an `Arc<dyn UserStore>`,
//! the token codec, the cookie policy and the bcrypt cost. Only the store is
//! mutable, and it synchronizes itself.
//!
//! # Error Handling
//!
//! Guards and handlers return `BackendError`, which renders as
//! `{"error": {"code", "message"}}` with the matching status.

pub mod auth;
pub mod error;
pub mod favorites;
pub mod middleware;
pub mod routes;
pub mod server;
