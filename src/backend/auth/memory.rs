/**
 * In-Memory Credential Store
 *
 * `UserStore` backed by a map behind a mutex. Used when no `DATABASE_URL`
 * is configured and by the test suites. The uniqueness check and the insert
 * happen under one lock, so it gives the same guarantee as the Postgres
 * unique index.
 */

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::backend::auth::users::{FavoriteChange, NewUser, StoreError, User, UserStore};

/// In-process user store
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a user record. Tokens already issued for it stay valid until
    /// they expire.
    pub fn delete_user(&self, id: Uuid) -> Option<User> {
        self.lock().remove(&id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<Uuid, User>> {
        // A poisoned map is still structurally sound; every write is a single insert/remove.
        self.users.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.lock();
        if users.values().any(|existing| existing.email == user.email) {
            return Err(StoreError::DuplicateEmail(user.email));
        }

        let now = Utc::now();
        let record = User {
            id: Uuid::new_v4(),
            username: user.username,
            email: user.email,
            password_hash: user.password_hash,
            favorites: Vec::new(),
            avatar_url: String::new(),
            created_at: now,
            updated_at: now,
        };
        users.insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.lock().values().find(|user| user.email == email).cloned())
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        Ok(self.lock().get(&id).cloned())
    }

    async fn add_favorite(&self, id: Uuid, pokemon_id: i64) -> Result<FavoriteChange, StoreError> {
        let mut users = self.lock();
        let user = users.get_mut(&id).ok_or(StoreError::NotFound)?;
        if user.favorites.contains(&pokemon_id) {
            return Ok(FavoriteChange::Unchanged);
        }
        user.favorites.push(pokemon_id);
        user.updated_at = Utc::now();
        Ok(FavoriteChange::Applied)
    }

    async fn remove_favorite(
        &self,
        id: Uuid,
        pokemon_id: i64,
    ) -> Result<FavoriteChange, StoreError> {
        let mut users = self.lock();
        let user = users.get_mut(&id).ok_or(StoreError::NotFound)?;
        let before = user.favorites.len();
        user.favorites.retain(|fav| *fav != pokemon_id);
        if user.favorites.len() == before {
            return Ok(FavoriteChange::Unchanged);
        }
        user.updated_at = Utc::now();
        Ok(FavoriteChange::Applied)
    }
}
