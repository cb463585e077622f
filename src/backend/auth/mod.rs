//! Authentication Module
//!
//! This module handles registration, login and cookie-based sessions.
//!
//! # Architecture
//!
//! - **`users`** - User model, `UserStore` trait and the PostgreSQL store
//! - **`memory`** - In-process `UserStore` used without a database
//! - **`password`** - bcrypt hashing on the blocking pool
//! - **`sessions`** - JWT session token codec
//! - **`csrf`** - CSRF token generation and comparison
//! - **`cookies`** - Attributes of the session and CSRF cookies
//! - **`handlers`** - HTTP handlers for the auth endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register / Login**: credentials checked → session token and CSRF
//!    token minted → both set as cookies → user returned
//! 2. **Me**: session cookie verified by the middleware → user re-read
//! 3. **Logout**: session and CSRF verified → both cookies cleared
//!
//! # Security
//!
//! - Sessions are stateless signed tokens with a 7 day lifetime; there is
//!   no server-side revocation list
//! - The CSRF token is independent of the session token; neither alone is
//!   enough to pass a guarded mutating request

/// User data model and credential store
pub mod users;

/// In-memory credential store
pub mod memory;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// CSRF token generation
pub mod csrf;

/// Cookie attributes
pub mod cookies;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, logout, register};
pub use handlers::{AuthResponse, LoginRequest, OkResponse, RegisterRequest};
