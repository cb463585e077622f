/**
 * Cookie Policy
 *
 * Attributes of the two cookies issued at register/login: the HttpOnly
 * session credential and the script-readable CSRF token. Browsers only drop
 * a cookie when the clearing Set-Cookie repeats its path, domain and
 * security attributes, so the set and clear builders all start from the
 * same `base` function.
 */

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use crate::backend::auth::sessions::SESSION_TTL_DAYS;

/// Name of the session credential cookie
pub const SESSION_COOKIE: &str = "token";
/// Name of the CSRF token cookie
pub const CSRF_COOKIE: &str = "csrfToken";

/// Cookie attributes for one deployment
#[derive(Debug, Clone, Copy)]
pub struct CookiePolicy {
    secure: bool,
}

impl CookiePolicy {
    /// `secure` is the production switch from configuration.
    pub fn new(secure: bool) -> Self {
        Self { secure }
    }

    /// Whether cookies carry the `Secure` attribute
    pub fn secure(&self) -> bool {
        self.secure
    }

    fn base(&self, name: &'static str, value: String) -> Cookie<'static> {
        Cookie::build((name, value))
            .path("/")
            .same_site(SameSite::Lax)
            .secure(self.secure)
            .build()
    }

    /// Session credential cookie, hidden from page scripts
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        let mut cookie = self.base(SESSION_COOKIE, token);
        cookie.set_http_only(true);
        cookie.set_max_age(Duration::days(SESSION_TTL_DAYS));
        cookie
    }

    /// CSRF cookie, readable by page scripts so they can echo it in a header
    pub fn csrf_cookie(&self, token: String) -> Cookie<'static> {
        let mut cookie = self.base(CSRF_COOKIE, token);
        cookie.set_http_only(false);
        cookie.set_max_age(Duration::days(SESSION_TTL_DAYS));
        cookie
    }

    /// Cookie that clears `name` in the browser
    pub fn removal_cookie(&self, name: &'static str) -> Cookie<'static> {
        let mut cookie = self.base(name, String::new());
        cookie.make_removal();
        cookie
    }
}
