/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /api/auth/login.
 *
 * # Authentication Process
 *
 * 1. Normalize the email, require both fields
 * 2. Look up the user by normalized email
 * 3. Verify the password using bcrypt
 * 4. Issue the session and CSRF cookies
 * 5. Return the user
 *
 * # Security
 *
 * - An unknown email and a wrong password produce the same 401 response
 * - The session token only ever travels in an HttpOnly cookie
 * - Passwords and tokens are never logged
 */

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::backend::auth::csrf::create_csrf_token;
use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest};
use crate::backend::auth::password::verify_password;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::validation::{normalize_email, validate_login};

/// Mint a session token and a fresh CSRF token and add both cookies to the jar.
pub(crate) fn issue_session_cookies(
    state: &AppState,
    jar: CookieJar,
    user_id: Uuid,
) -> Result<CookieJar, BackendError> {
    let token = state.codec.issue(user_id)?;
    let csrf_token = create_csrf_token();

    Ok(jar
        .add(state.cookies.session_cookie(token))
        .add(state.cookies.csrf_cookie(csrf_token)))
}

/// Login handler
///
/// # Errors
///
/// * `422 VALIDATION_ERROR` - Email or password missing
/// * `401 INVALID_CREDENTIALS` - Unknown email or wrong password
/// * `500 INTERNAL_ERROR` - Store, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/login HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "ash@test.com",
///   "password": "pikachu1"
/// }
/// ```
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<AuthResponse>), BackendError> {
    let Json(request) = payload?;

    let email = normalize_email(&request.email);
    validate_login(&email, &request.password)?;

    let Some(user) = state.store.get_user_by_email(&email).await? else {
        tracing::warn!("Login failed: unknown email {}", email);
        return Err(BackendError::InvalidCredentials);
    };

    if !verify_password(request.password, user.password_hash.clone()).await? {
        tracing::warn!("Login failed: wrong password for user {}", user.id);
        return Err(BackendError::InvalidCredentials);
    }

    let jar = issue_session_cookies(&state, jar, user.id)?;

    tracing::info!("User logged in: {} ({})", user.username, user.email);

    Ok((jar, Json(AuthResponse { user })))
}
