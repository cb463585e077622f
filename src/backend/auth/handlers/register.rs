/**
 * Register Handler
 *
 * This module implements the user registration handler for POST /api/auth/register.
 *
 * # Registration Process
 *
 * 1. Validate username, email and password (first violated rule wins)
 * 2. Normalize the email and reject a taken address
 * 3. Hash the password using bcrypt
 * 4. Create the user in the store
 * 5. Issue the session and CSRF cookies
 * 6. Return the created user with 201
 *
 * The early lookup only gives a fast answer for the common case. The store
 * rejects a duplicate on insert as well, so two concurrent registrations for
 * one address still end with exactly one user.
 */

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::Json,
};
use axum_extra::extract::CookieJar;

use crate::backend::auth::handlers::login::issue_session_cookies;
use crate::backend::auth::handlers::types::{AuthResponse, RegisterRequest};
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::NewUser;
use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::shared::validation::{normalize_email, validate_registration};

/// Register handler
///
/// # Errors
///
/// * `422 VALIDATION_ERROR` - A field fails its rule
/// * `409 DUPLICATE_EMAIL` - Normalized email already registered
/// * `500 INTERNAL_ERROR` - Store, hashing or signing failure
///
/// # Example Request
///
/// ```http
/// POST /api/auth/register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "username": "ash",
///   "email": "ash@test.com",
///   "password": "pikachu1"
/// }
/// ```
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, CookieJar, Json<AuthResponse>), BackendError> {
    let Json(request) = payload?;

    validate_registration(&request.username, &request.email, &request.password)?;

    let email = normalize_email(&request.email);
    if state.store.get_user_by_email(&email).await?.is_some() {
        tracing::warn!("Registration rejected, email taken: {}", email);
        return Err(BackendError::DuplicateEmail);
    }

    let password_hash = hash_password(request.password, state.bcrypt_cost).await?;

    let user = state
        .store
        .create_user(NewUser {
            username: request.username.trim().to_string(),
            email,
            password_hash,
        })
        .await
        .map_err(|e| {
            tracing::warn!("Failed to create user: {}", e);
            BackendError::from(e)
        })?;

    let jar = issue_session_cookies(&state, jar, user.id)?;

    tracing::info!("User registered: {} ({})", user.username, user.email);

    Ok((StatusCode::CREATED, jar, Json(AuthResponse { user })))
}
