//! Input Validation
//!
//! Normalization and business-rule checks for the auth and favorites
//! payloads. Every check returns the first violated rule only, so the
//! client always sees a single message.

use crate::shared::error::SharedError;

/// Minimum username length after trimming
pub const USERNAME_MIN_LEN: usize = 3;
/// Maximum username length after trimming
pub const USERNAME_MAX_LEN: usize = 30;
/// Minimum password length (not trimmed)
pub const PASSWORD_MIN_LEN: usize = 6;

/// Trim and lowercase an email so case/whitespace variants collide.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate a registration payload.
///
/// Rules are checked in order: username, email, password. Lengths are
/// counted in characters, not bytes.
pub fn validate_registration(
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), SharedError> {
    let username_len = username.trim().chars().count();
    if username_len < USERNAME_MIN_LEN {
        return Err(SharedError::validation(
            "username",
            "Username must be at least 3 characters",
        ));
    }
    if username_len > USERNAME_MAX_LEN {
        return Err(SharedError::validation(
            "username",
            "Username must be at most 30 characters",
        ));
    }

    if !normalize_email(email).contains('@') {
        return Err(SharedError::validation("email", "Invalid email"));
    }

    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(SharedError::validation(
            "password",
            "Password must be at least 6 characters",
        ));
    }

    Ok(())
}

/// Validate a login payload: both fields must be non-empty after email
/// normalization. The message never says which one is missing.
pub fn validate_login(normalized_email: &str, password: &str) -> Result<(), SharedError> {
    if normalized_email.is_empty() || password.is_empty() {
        return Err(SharedError::validation("credentials", "Invalid credentials"));
    }
    Ok(())
}

/// Accept a JSON value as a favorite id: a positive integer.
///
/// Numeric strings are accepted too, because form-driven clients send them.
/// Integral floats such as `25.0` count as integers.
pub fn favorite_id_from_json(value: &serde_json::Value) -> Result<i64, SharedError> {
    let id = match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match id {
        Some(id) if id > 0 => Ok(id),
        _ => Err(SharedError::validation("id", "Invalid id")),
    }
}

/// Parse a path segment as a positive integer id.
pub fn parse_positive_id(raw: &str) -> Result<i64, SharedError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(SharedError::invalid_id(raw)),
    }
}
