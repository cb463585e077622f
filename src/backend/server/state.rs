/**
 * Application State Management
 *
 * This module defines the application state shared by every handler and
 * guard, and the `FromRef` implementations that let handlers extract only
 * the part they need.
 *
 * # Thread Safety
 *
 * Nothing in `AppState` is mutated after startup. The store is the only
 * shared mutable resource and synchronizes itself.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::cookies::CookiePolicy;
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::auth::users::UserStore;
use crate::shared::AppConfig;

/// Shared handle to the credential store
pub type SharedUserStore = Arc<dyn UserStore>;

/// Application state
///
/// # Fields
///
/// * `store` - Credential store (PostgreSQL or in-memory)
/// * `codec` - Session token signer/verifier
/// * `cookies` - Cookie attribute policy
/// * `bcrypt_cost` - Cost factor for new password hashes
#[derive(Clone)]
pub struct AppState {
    pub store: SharedUserStore,
    pub codec: TokenCodec,
    pub cookies: CookiePolicy,
    pub bcrypt_cost: u32,
}

impl AppState {
    /// Build the state from validated configuration and a store.
    pub fn new(config: &AppConfig, store: SharedUserStore) -> Self {
        Self {
            store,
            codec: TokenCodec::new(&config.jwt_secret),
            cookies: CookiePolicy::new(config.production),
            bcrypt_cost: config.bcrypt_cost,
        }
    }
}

impl FromRef<AppState> for SharedUserStore {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for TokenCodec {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.codec.clone()
    }
}

impl FromRef<AppState> for CookiePolicy {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.cookies
    }
}
