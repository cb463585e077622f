//! Favorites Module
//!
//! Per-user list of favorite Pokémon ids. Every route sits behind the
//! session middleware; the mutating ones also behind the CSRF guard.
//!
//! - **`list_favorites`** - GET /api/favorites - bare id array
//! - **`add_favorite`** - POST /api/favorites - `{"id": n}` → 201
//! - **`remove_favorite`** - DELETE /api/favorites/{id} → 200

pub mod handlers;

pub use handlers::{add_favorite, list_favorites, remove_favorite, FavoriteId};
