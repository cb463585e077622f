//! Authentication Handlers Module
//!
//! HTTP handlers for the session lifecycle.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! ├── login.rs     - User authentication handler
//! ├── me.rs        - Get current user handler
//! └── logout.rs    - Cookie clearing handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - 201 and both cookies
//! - **`login`** - POST /api/auth/login - 200 and both cookies
//! - **`get_me`** - GET /api/auth/me - requires a session
//! - **`logout`** - POST /api/auth/logout - requires a session and CSRF match
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - The session token is only ever sent in an HttpOnly cookie
//! - Tokens expire after 7 days
//! - Invalid credentials return 401 (no information leakage)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Get current user handler
pub mod me;

/// Logout handler
pub mod logout;

pub use types::{AuthResponse, LoginRequest, OkResponse, RegisterRequest};

pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use register::register;
