/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /api/auth/me, which returns
 * the currently authenticated user.
 *
 * # Authentication
 *
 * Mounted behind the session middleware, which has already verified the
 * `token` cookie. The handler re-reads the full record from the store; a
 * record deleted after the token was issued yields 404 USER_NOT_FOUND.
 */

use axum::{extract::State, response::Json};

use crate::backend::auth::handlers::types::AuthResponse;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::SharedUserStore;

/// Get current user handler
///
/// # Errors
///
/// * `401 UNAUTHORIZED` - Rejected earlier by the session middleware
/// * `404 USER_NOT_FOUND` - The user no longer exists
/// * `500 INTERNAL_ERROR` - Store failure
pub async fn get_me(
    State(store): State<SharedUserStore>,
    AuthUser(auth): AuthUser,
) -> Result<Json<AuthResponse>, BackendError> {
    let user = store.get_user_by_id(auth.user_id).await?.ok_or_else(|| {
        tracing::warn!("Session refers to missing user {}", auth.user_id);
        BackendError::UserNotFound
    })?;

    Ok(Json(AuthResponse { user }))
}
