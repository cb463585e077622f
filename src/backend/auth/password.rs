/**
 * Password Hashing
 *
 * bcrypt hashing and verification. Both are CPU-bound, so the async
 * wrappers run them on tokio's blocking pool.
 */

use thiserror::Error;

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("bcrypt failure: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
    #[error("blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Hash a password with the given bcrypt cost.
pub async fn hash_password(password: String, cost: u32) -> Result<String, PasswordError> {
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
    Ok(hashed)
}

/// Check a password against a stored bcrypt hash.
///
/// A stored hash that bcrypt cannot parse counts as a mismatch, so a
/// corrupted record is indistinguishable from a wrong password.
pub async fn verify_password(password: String, hash: String) -> Result<bool, PasswordError> {
    let outcome = tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash)).await?;
    match outcome {
        Ok(valid) => Ok(valid),
        Err(e) => {
            tracing::warn!("Stored password hash unreadable: {}", e);
            Ok(false)
        }
    }
}
