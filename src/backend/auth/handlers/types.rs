/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the register, login, me and logout
 * handlers. Request fields default to empty strings so an incomplete body
 * fails the business rules (422) rather than deserialization.
 */

use serde::{Deserialize, Serialize};

use crate::backend::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct RegisterRequest {
    /// Display name (3-30 chars after trimming)
    pub username: String,
    /// Email address, normalized before use
    pub email: String,
    /// Plain password (at least 6 chars), hashed before storage
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response carrying the principal
#[derive(Serialize, Debug)]
pub struct AuthResponse {
    pub user: User,
}

/// Acknowledgement body
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
