/**
 * Credential Store Selection
 *
 * Picks the `UserStore` implementation from configuration: PostgreSQL when
 * `DATABASE_URL` is set, the in-memory store otherwise.
 *
 * # Error Handling
 *
 * A configured database that cannot be reached is a startup error; the
 * server does not silently fall back to memory and lose accounts. Migration
 * failures are logged and startup continues, since the schema may already
 * be in place.
 */

use std::sync::Arc;

use sqlx::PgPool;

use crate::backend::auth::memory::MemoryUserStore;
use crate::backend::auth::users::PgUserStore;
use crate::backend::server::state::SharedUserStore;
use crate::shared::AppConfig;

/// Connect the credential store described by `config`.
///
/// 1. Without `DATABASE_URL`, returns an empty in-memory store
/// 2. Otherwise creates a PostgreSQL connection pool
/// 3. Runs the embedded migrations
pub async fn load_store(config: &AppConfig) -> Result<SharedUserStore, sqlx::Error> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set. Users are kept in memory and lost on restart.");
        return Ok(Arc::new(MemoryUserStore::new()));
    };

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url).await.map_err(|e| {
        tracing::error!("Failed to create database connection pool: {}", e);
        e
    })?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(()) => tracing::info!("Database migrations completed successfully"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Ok(Arc::new(PgUserStore::new(pool)))
}
