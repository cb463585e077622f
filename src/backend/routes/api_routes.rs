/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `GET /api/health` - Liveness probe
 * - `POST /api/auth/register` - User registration
 * - `POST /api/auth/login` - User login
 *
 * ## Guarded (session, then CSRF on mutating methods)
 * - `GET /api/auth/me` - Get current user info
 * - `POST /api/auth/logout` - Clear the session cookies
 * - `GET /api/favorites` - List favorite ids
 * - `POST /api/favorites` - Add a favorite
 * - `DELETE /api/favorites/{id}` - Remove a favorite
 */

use axum::{
    middleware::{from_fn, from_fn_with_state},
    response::Json,
    routing::{delete, get, post},
    Router,
};

use crate::backend::auth::handlers::OkResponse;
use crate::backend::auth::{get_me, login, logout, register};
use crate::backend::favorites::{add_favorite, list_favorites, remove_favorite};
use crate::backend::middleware::{require_auth, require_csrf};
use crate::backend::server::state::AppState;

async fn health() -> Json<OkResponse> {
    Json(OkResponse::ok())
}

/// Routes reachable without a session.
///
/// Register and login are mutating but sit outside the CSRF guard: there is
/// no session yet whose cookies a forged request could ride on.
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/health", get(health))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
}

/// Routes behind the guard pipeline
///
/// With `route_layer` the last layer added is the outermost, so the session
/// middleware runs before the CSRF guard and both run before the handler.
/// Unmatched paths never reach either guard.
pub fn configure_guarded_routes(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/api/auth/me", get(get_me))
        .route("/api/auth/logout", post(logout))
        .route("/api/favorites", get(list_favorites).post(add_favorite))
        .route("/api/favorites/{id}", delete(remove_favorite))
        .route_layer(from_fn(require_csrf))
        .route_layer(from_fn_with_state(app_state.clone(), require_auth))
}
