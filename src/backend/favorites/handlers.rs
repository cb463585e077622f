/**
 * Favorites Handlers
 *
 * The store applies each change as an insert-if-absent or remove-if-present,
 * so two concurrent adds of one id leave a single entry and the loser gets
 * 409 DUPLICATE_KEY.
 */

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::backend::auth::users::FavoriteChange;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::SharedUserStore;
use crate::shared::validation::{favorite_id_from_json, parse_positive_id};

/// Body echoed after a change
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FavoriteId {
    pub id: i64,
}

/// GET /api/favorites
pub async fn list_favorites(
    State(store): State<SharedUserStore>,
    AuthUser(auth): AuthUser,
) -> Result<Json<Vec<i64>>, BackendError> {
    let user = store
        .get_user_by_id(auth.user_id)
        .await?
        .ok_or(BackendError::UserNotFound)?;

    Ok(Json(user.favorites))
}

/// POST /api/favorites
///
/// # Errors
///
/// * `422 VALIDATION_ERROR` - `id` is not a positive integer
/// * `404 USER_NOT_FOUND` - The user no longer exists
/// * `409 DUPLICATE_KEY` - Already a favorite
pub async fn add_favorite(
    State(store): State<SharedUserStore>,
    AuthUser(auth): AuthUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<FavoriteId>), BackendError> {
    let Json(body) = payload?;
    let id = favorite_id_from_json(&body["id"])?;

    match store.add_favorite(auth.user_id, id).await? {
        FavoriteChange::Applied => {
            tracing::info!("User {} added favorite {}", auth.user_id, id);
            Ok((StatusCode::CREATED, Json(FavoriteId { id })))
        }
        FavoriteChange::Unchanged => Err(BackendError::DuplicateKey(
            "Pokémon is already a favorite".to_string(),
        )),
    }
}

/// DELETE /api/favorites/{id}
///
/// # Errors
///
/// * `400 INVALID_ID` - Path segment is not a positive integer
/// * `404 USER_NOT_FOUND` - The user no longer exists
/// * `404 NOT_FOUND` - Not a favorite
pub async fn remove_favorite(
    State(store): State<SharedUserStore>,
    AuthUser(auth): AuthUser,
    Path(raw_id): Path<String>,
) -> Result<Json<FavoriteId>, BackendError> {
    let id = parse_positive_id(&raw_id)?;

    match store.remove_favorite(auth.user_id, id).await? {
        FavoriteChange::Applied => {
            tracing::info!("User {} removed favorite {}", auth.user_id, id);
            Ok(Json(FavoriteId { id }))
        }
        FavoriteChange::Unchanged => Err(BackendError::not_found("Favorite does not exist")),
    }
}
