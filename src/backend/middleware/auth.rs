/**
 * Session Middleware
 *
 * This module protects routes that require a signed-in user. It reads the
 * session credential from the `token` cookie only (never from headers or
 * the body), verifies it, and attaches the user id to the request
 * extensions. It does not touch the store; resolving the full user record
 * is left to the handler.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::backend::auth::cookies::SESSION_COOKIE;
use crate::backend::auth::sessions::TokenCodec;
use crate::backend::error::types::{BackendError, SESSION_INVALID, SESSION_MISSING};

/// Authenticated user data extracted from the session cookie
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Resolve the session cookie into an authenticated user.
///
/// An absent or empty cookie is "missing"; every verification failure is
/// "invalid", whatever its cause.
pub fn authenticate(codec: &TokenCodec, jar: &CookieJar) -> Result<AuthenticatedUser, BackendError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value())
        .filter(|value| !value.is_empty())
        .ok_or(BackendError::Unauthorized(SESSION_MISSING))?;

    let user_id = codec
        .verify(token)
        .map_err(|_| BackendError::Unauthorized(SESSION_INVALID))?;

    Ok(AuthenticatedUser { user_id })
}

/// Authentication middleware
///
/// 1. Reads the `token` cookie
/// 2. Verifies signature and expiry
/// 3. Attaches `AuthenticatedUser` to the request extensions
///
/// Returns 401 UNAUTHORIZED if the cookie is missing or invalid.
pub async fn require_auth(
    State(codec): State<TokenCodec>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(&codec, &jar).map_err(|e| {
        tracing::warn!("Rejected {} {}: {}", request.method(), request.uri().path(), e);
        e
    })?;

    tracing::debug!("Session accepted for user {}", user.user_id);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Only usable on routes wrapped by `require_auth`; elsewhere it rejects
/// with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::Unauthorized(SESSION_MISSING)
            })?;

        Ok(AuthUser(user))
    }
}
