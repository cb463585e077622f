/**
 * CSRF Guard
 *
 * Double-submit check for state-changing requests. The `csrfToken` cookie
 * must be present and must equal the `x-csrf-token` header exactly.
 * GET, HEAD and OPTIONS always pass.
 *
 * Mounted inside the session middleware, so an unauthenticated request is
 * answered with 401 before this guard is consulted.
 */

use axum::{
    extract::Request,
    http::{HeaderMap, Method},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;

use crate::backend::auth::cookies::CSRF_COOKIE;
use crate::backend::auth::csrf::{tokens_match, CSRF_HEADER};
use crate::backend::error::BackendError;

/// Methods that never mutate state
pub fn is_safe_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Decide whether a request passes the double-submit check.
pub fn check_csrf(method: &Method, jar: &CookieJar, headers: &HeaderMap) -> Result<(), BackendError> {
    if is_safe_method(method) {
        return Ok(());
    }

    let cookie = jar.get(CSRF_COOKIE).map(|cookie| cookie.value());
    let header = headers
        .get(CSRF_HEADER)
        .and_then(|value| value.to_str().ok());

    match (cookie, header) {
        (Some(cookie), Some(header)) if tokens_match(cookie, header) => Ok(()),
        _ => Err(BackendError::CsrfInvalid),
    }
}

/// CSRF middleware
///
/// Returns 403 CSRF_INVALID for a mutating request whose cookie and header
/// are absent or differ.
pub async fn require_csrf(jar: CookieJar, request: Request, next: Next) -> Result<Response, BackendError> {
    if let Err(e) = check_csrf(request.method(), &jar, request.headers()) {
        tracing::warn!("CSRF check failed for {} {}", request.method(), request.uri().path());
        return Err(e);
    }

    Ok(next.run(request).await)
}
