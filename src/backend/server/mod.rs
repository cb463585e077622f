//! Server Module
//!
//! Server initialization, application state, and store selection.
//!
//! - **`init`** - `create_app` / `create_app_with_store`
//! - **`state`** - `AppState` and its `FromRef` projections
//! - **`config`** - Credential store selection from `AppConfig`

pub mod config;
pub mod init;
pub mod state;

pub use init::{create_app, create_app_with_store};
pub use state::{AppState, SharedUserStore};
