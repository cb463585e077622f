/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * Outermost first:
 * 1. CORS - the configured client origin only, with credentials
 * 2. HTTP tracing
 * 3. Panic recovery - a handler panic becomes the generic 500 body
 * 4. Per-route guards (see `api_routes`)
 *
 * # Fallback
 *
 * Unknown routes answer 404 with the standard error body.
 */

use std::any::Any;

use axum::{
    http::{header::CONTENT_TYPE, HeaderName, HeaderValue, Method},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::backend::auth::csrf::CSRF_HEADER;
use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_guarded_routes, configure_public_routes};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Store, token codec and cookie policy
/// * `client_origin` - The single origin allowed to call with credentials
pub fn create_router(app_state: AppState, client_origin: &str) -> Router<()> {
    let router = configure_public_routes(Router::new());
    let router = router.merge(configure_guarded_routes(&app_state));

    router
        .fallback(|| async { BackendError::not_found("Route not found") })
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(client_origin))
        .with_state(app_state)
}

/// Render a handler panic as an internal error. The payload only reaches
/// the log.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    };

    BackendError::internal(format!("handler panicked: {detail}")).into_response()
}

/// CORS for the browser client. Cookies only travel cross-origin with
/// credentials allowed, which in turn rules out a wildcard origin.
fn cors_layer(client_origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(CSRF_HEADER)]);

    match HeaderValue::from_str(client_origin) {
        Ok(origin) => layer.allow_origin(origin),
        Err(e) => {
            tracing::error!("CLIENT_ORIGIN is not a valid header value ({}); cross-origin calls disabled", e);
            layer
        }
    }
}
