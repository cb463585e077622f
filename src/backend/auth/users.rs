/**
 * User Model and Credential Store
 *
 * This module defines the principal record, the `UserStore` trait the
 * handlers depend on, and its PostgreSQL implementation. The store owns
 * email uniqueness: the Postgres table carries a unique index, and a
 * violation surfaces as `StoreError::DuplicateEmail` so concurrent
 * registrations for one address cannot both succeed.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

/// User struct representing a user in the database
///
/// `password_hash` is never serialized, so any JSON rendering of a `User`
/// is safe to send to a client.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Username (3-30 chars, trimmed)
    pub username: String,
    /// Normalized email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Favorite Pokémon ids
    pub favorites: Vec<i64>,
    /// Public avatar URL, empty when unset
    pub avatar_url: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

/// Data needed to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Store failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already registered: {0}")]
    DuplicateEmail(String),
    #[error("user not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Outcome of an insert-if-absent on the favorites list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteChange {
    Applied,
    Unchanged,
}

/// Credential store consumed by the auth and favorites handlers
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Create a new user; fails with `DuplicateEmail` on a taken address
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Get user by normalized email
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Get user by ID
    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Add a favorite unless already present
    async fn add_favorite(&self, id: Uuid, pokemon_id: i64) -> Result<FavoriteChange, StoreError>;

    /// Remove a favorite if present
    async fn remove_favorite(&self, id: Uuid, pokemon_id: i64)
        -> Result<FavoriteChange, StoreError>;
}

const USER_COLUMNS: &str =
    "id, username, email, password_hash, favorites, avatar_url, created_at, updated_at";

/// PostgreSQL implementation of UserStore
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn ensure_exists(&self, id: Uuid) -> Result<(), StoreError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        if exists {
            Ok(())
        } else {
            Err(StoreError::NotFound)
        }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let query = format!(
            r#"
            INSERT INTO users (id, username, email, password_hash, favorites, avatar_url, created_at, updated_at)
            VALUES ($1, $2, $3, $4, '{{}}', '', $5, $5)
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let Some(db_err) = e.as_database_error() {
                    if db_err.is_unique_violation() {
                        return StoreError::DuplicateEmail(user.email.clone());
                    }
                }
                StoreError::Database(e)
            })
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn add_favorite(&self, id: Uuid, pokemon_id: i64) -> Result<FavoriteChange, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET favorites = array_append(favorites, $2), updated_at = $3
            WHERE id = $1 AND NOT ($2 = ANY(favorites))
            "#,
        )
        .bind(id)
        .bind(pokemon_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 1 {
            return Ok(FavoriteChange::Applied);
        }
        self.ensure_exists(id).await?;
        Ok(FavoriteChange::Unchanged)
    }

    async fn remove_favorite(
        &self,
        id: Uuid,
        pokemon_id: i64,
    ) -> Result<FavoriteChange, StoreError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET favorites = array_remove(favorites, $2), updated_at = $3
            WHERE id = $1 AND $2 = ANY(favorites)
            "#,
        )
        .bind(id)
        .bind(pokemon_id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 1 {
            return Ok(FavoriteChange::Applied);
        }
        self.ensure_exists(id).await?;
        Ok(FavoriteChange::Unchanged)
    }
}
