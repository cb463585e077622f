/**
 * Logout Handler
 *
 * POST /api/auth/logout. Mounted behind both the session middleware and the
 * CSRF guard. Clears both cookies with the same attributes they were set
 * with. There is no server-side session to revoke; a copied token stays
 * valid until it expires.
 */

use axum::{extract::State, response::Json};
use axum_extra::extract::CookieJar;

use crate::backend::auth::cookies::{CookiePolicy, CSRF_COOKIE, SESSION_COOKIE};
use crate::backend::auth::handlers::types::OkResponse;
use crate::backend::middleware::AuthUser;

/// Logout handler
///
/// Always answers `{"ok": true}` once the guards have passed. The removal
/// cookies are emitted even if the request carried only one of the two.
pub async fn logout(
    State(policy): State<CookiePolicy>,
    AuthUser(auth): AuthUser,
    jar: CookieJar,
) -> (CookieJar, Json<OkResponse>) {
    let jar = jar
        .add(policy.removal_cookie(SESSION_COOKIE))
        .add(policy.removal_cookie(CSRF_COOKIE));

    tracing::info!("User logged out: {}", auth.user_id);

    (jar, Json(OkResponse::ok()))
}
