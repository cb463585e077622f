/**
 * Server Initialization
 *
 * Builds the Axum application from configuration.
 *
 * # Initialization Process
 *
 * 1. Load the credential store (PostgreSQL or in-memory)
 * 2. Build the token codec and cookie policy from configuration
 * 3. Create and configure the router
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_store;
use crate::backend::server::state::{AppState, SharedUserStore};
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails only when `DATABASE_URL` is set and the database is unreachable.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, sqlx::Error> {
    tracing::info!("Initializing Pokédex backend server");

    let store = load_store(&config).await?;
    Ok(create_app_with_store(&config, store))
}

/// Create the application over an existing store.
pub fn create_app_with_store(config: &AppConfig, store: SharedUserStore) -> Router<()> {
    let app_state = AppState::new(config, store);

    tracing::info!(
        "Cookies {} the Secure attribute; CORS origin {}",
        if app_state.cookies.secure() { "carry" } else { "omit" },
        config.client_origin
    );

    create_router(app_state, &config.client_origin)
}
