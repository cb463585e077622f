//! Authentication test helpers
//!
//! Builds a `TestServer` over the in-memory store and carries session
//! cookies between requests. Cookies are passed as explicit `Cookie` headers
//! so each test states exactly what the browser would send.

use std::sync::Arc;

use axum::http::{header::COOKIE, HeaderName, HeaderValue};
use axum_test::{TestResponse, TestServer};
use pokedex_server::backend::auth::memory::MemoryUserStore;
use pokedex_server::backend::auth::sessions::TokenCodec;
use pokedex_server::backend::server::create_app_with_store;
use pokedex_server::shared::AppConfig;
use serde_json::json;

/// Signing secret of the test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// Running test server plus a handle on its store
pub struct TestApp {
    pub server: TestServer,
    pub store: Arc<MemoryUserStore>,
}

/// Create a test server with an empty in-memory store
pub fn create_test_app() -> TestApp {
    let config = AppConfig::builder()
        .jwt_secret(TEST_SECRET)
        .bcrypt_cost(4)
        .build()
        .unwrap();
    let store = Arc::new(MemoryUserStore::new());
    let app = create_app_with_store(&config, store.clone());

    TestApp {
        server: TestServer::new(app).unwrap(),
        store,
    }
}

/// Codec sharing the test server's secret
pub fn test_codec() -> TokenCodec {
    TokenCodec::new(TEST_SECRET)
}

/// The two cookies issued at register/login
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub csrf: String,
}

impl Session {
    /// Read both cookies from a register or login response
    pub fn from_response(response: &TestResponse) -> Self {
        Self {
            token: response.cookie("token").value().to_string(),
            csrf: response.cookie("csrfToken").value().to_string(),
        }
    }

    /// `Cookie` header carrying both values
    pub fn cookie_header(&self) -> HeaderValue {
        cookie_header(&[("token", self.token.as_str()), ("csrfToken", self.csrf.as_str())])
    }

    /// `x-csrf-token` header echoing the CSRF cookie
    pub fn csrf_header(&self) -> (HeaderName, HeaderValue) {
        csrf_header(&self.csrf)
    }
}

/// Render a `Cookie` request header
pub fn cookie_header(pairs: &[(&str, &str)]) -> HeaderValue {
    let rendered = pairs
        .iter()
        .map(|(name, value)| format!("{name}={value}"))
        .collect::<Vec<_>>()
        .join("; ");
    HeaderValue::from_str(&rendered).unwrap()
}

/// Render an `x-csrf-token` request header
pub fn csrf_header(value: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-csrf-token"),
        HeaderValue::from_str(value).unwrap(),
    )
}

/// POST /api/auth/register
pub async fn register(server: &TestServer, username: &str, email: &str, password: &str) -> TestResponse {
    server
        .post("/api/auth/register")
        .json(&json!({
            "username": username,
            "email": email,
            "password": password,
        }))
        .await
}

/// POST /api/auth/login
pub async fn login(server: &TestServer, email: &str, password: &str) -> TestResponse {
    server
        .post("/api/auth/login")
        .json(&json!({ "email": email, "password": password }))
        .await
}

/// Register a user and return its session
pub async fn register_session(server: &TestServer, username: &str, email: &str) -> Session {
    let response = register(server, username, email, "pikachu1").await;
    assert_eq!(response.status_code(), axum::http::StatusCode::CREATED);
    Session::from_response(&response)
}

/// GET /api/auth/me with the given cookies
pub async fn get_me(server: &TestServer, cookies: HeaderValue) -> TestResponse {
    server.get("/api/auth/me").add_header(COOKIE, cookies).await
}
