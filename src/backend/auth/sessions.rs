/**
 * Session Tokens
 *
 * This module signs and verifies the session credential carried in the
 * `token` cookie. The credential is a stateless HS256 JWT holding only the
 * user id, the issue time and the expiry; nothing about it is stored
 * server-side.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Lifetime of a session credential
pub const SESSION_TTL_DAYS: i64 = 7;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token failures
///
/// Verification failures are deliberately a single variant: a forged,
/// malformed or expired token all look the same to the caller.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid session token")]
    Invalid,
    #[error("failed to sign session token: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),
}

/// Signs and verifies session credentials with a server-held secret
#[derive(Clone)]
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Create a codec from the signing secret.
    ///
    /// The secret is validated as non-empty by `AppConfig` before this is
    /// called.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Issue a credential for a user, starting now.
    pub fn issue(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a credential as if it had been minted at `issued_at`.
    pub fn issue_at(&self, user_id: Uuid, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let expires_at = issued_at + Duration::days(SESSION_TTL_DAYS);
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        Ok(encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?)
    }

    /// Verify a credential and return the embedded user id.
    ///
    /// A credential is accepted only while the current second is strictly
    /// before `exp`.
    pub fn verify(&self, token: &str) -> Result<Uuid, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation).map_err(|e| {
            tracing::debug!("Token rejected: {:?}", e.kind());
            TokenError::Invalid
        })?;

        // jsonwebtoken still accepts exp == now
        if data.claims.exp <= Utc::now().timestamp() {
            tracing::debug!("Token rejected: expires this second");
            return Err(TokenError::Invalid);
        }

        Uuid::parse_str(&data.claims.sub).map_err(|_| TokenError::Invalid)
    }
}
