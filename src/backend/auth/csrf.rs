/**
 * CSRF Tokens
 *
 * Random tokens for the double-submit cookie pattern. The token is
 * independent of the session credential: it is minted next to it, stored in
 * a script-readable cookie, and echoed back by the client in the
 * `x-csrf-token` header.
 */

use rand::RngCore;
use subtle::ConstantTimeEq;

/// Name of the request header carrying the echoed token
pub const CSRF_HEADER: &str = "x-csrf-token";

/// Number of random bytes per token (hex encoded to twice as many chars)
const CSRF_TOKEN_BYTES: usize = 24;

/// Generate a new CSRF token from the OS-seeded thread RNG.
pub fn create_csrf_token() -> String {
    let mut bytes = [0u8; CSRF_TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Compare the cookie value with the header value.
///
/// Both must be non-empty and byte-for-byte equal. The comparison itself
/// runs in constant time.
pub fn tokens_match(cookie: &str, header: &str) -> bool {
    if cookie.is_empty() || header.is_empty() || cookie.len() != header.len() {
        return false;
    }
    cookie.as_bytes().ct_eq(header.as_bytes()).into()
}
