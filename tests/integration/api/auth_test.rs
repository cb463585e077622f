//! Authentication API integration tests
//!
//! Register, login, me and logout through the full router, including the
//! cookie attributes a browser would see.

use axum::http::{
    header::{AUTHORIZATION, COOKIE},
    HeaderValue, StatusCode,
};
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::common::*;

#[tokio::test]
async fn test_register_sets_both_cookies() {
    let app = create_test_app();

    let response = register(&app.server, "ash", "ash@test.com", "pikachu1").await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let set_cookies: Vec<String> = response
        .headers()
        .get_all("set-cookie")
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect();
    assert_eq!(set_cookies.len(), 2);

    let token = response.cookie("token");
    assert_eq!(token.http_only(), Some(true));
    assert_eq!(token.path(), Some("/"));
    assert_eq!(token.max_age(), Some(time::Duration::days(7)));

    let csrf = response.cookie("csrfToken");
    assert_ne!(csrf.http_only(), Some(true));
    assert_eq!(csrf.path(), Some("/"));
    assert_eq!(csrf.value().len(), 48);

    for cookie in &set_cookies {
        crate::assert_contains!(cookie, "SameSite=Lax");
        assert!(!cookie.contains("Secure"), "non-production cookie marked Secure: {cookie}");
    }
}

#[tokio::test]
async fn test_register_returns_user_without_password() {
    let app = create_test_app();

    let response = register(&app.server, "ash", "ash@test.com", "pikachu1").await;
    let body: Value = response.json();

    let user = &body["user"];
    assert_eq!(user["username"], "ash");
    assert_eq!(user["email"], "ash@test.com");
    assert_eq!(user["favorites"], json!([]));
    assert!(user.get("passwordHash").is_none());
    assert!(user.get("password_hash").is_none());
    assert!(!response.text().contains("pikachu1"));
}

#[tokio::test]
async fn test_register_validation_messages() {
    let app = create_test_app();

    let cases = [
        (json!({"username": "as", "email": "ash@test.com", "password": "pikachu1"}), "Username must be at least 3 characters"),
        (json!({"username": "ash", "email": "ash.test.com", "password": "pikachu1"}), "Invalid email"),
        (json!({"username": "ash", "email": "ash@test.com", "password": "pika"}), "Password must be at least 6 characters"),
        (json!({"email": "ash@test.com", "password": "pikachu1"}), "Username must be at least 3 characters"),
        (json!({"username": "a", "email": "nope", "password": "x"}), "Username must be at least 3 characters"),
    ];

    for (payload, message) in cases {
        let response = app.server.post("/api/auth/register").json(&payload).await;
        let body = crate::assert_error_code!(response, StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], message);
    }
}

#[tokio::test]
async fn test_register_malformed_body() {
    let app = create_test_app();

    let response = app
        .server
        .post("/api/auth/register")
        .text("{not json")
        .content_type("application/json")
        .await;
    crate::assert_error_code!(response, StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_duplicate_normalized_email() {
    let app = create_test_app();

    let first = register(&app.server, "ash", "ash@test.com", "pikachu1").await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = register(&app.server, "ash_again", "  ASH@Test.com ", "pikachu2").await;
    crate::assert_error_code!(second, StatusCode::CONFLICT, "DUPLICATE_EMAIL");
}

#[tokio::test]
async fn test_login_success() {
    let app = create_test_app();
    register(&app.server, "ash", "ash@test.com", "pikachu1").await;

    let response = login(&app.server, " Ash@Test.COM", "pikachu1").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["user"]["email"], "ash@test.com");

    let session = Session::from_response(&response);
    let me = get_me(&app.server, session.cookie_header()).await;
    assert_eq!(me.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let app = create_test_app();
    register(&app.server, "ash", "ash@test.com", "pikachu1").await;

    let wrong_password = login(&app.server, "ash@test.com", "raichu22").await;
    let unknown_email = login(&app.server, "misty@test.com", "pikachu1").await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.status_code(), unknown_email.status_code());
    assert_eq!(wrong_password.text(), unknown_email.text());
    assert!(wrong_password.maybe_cookie("token").is_none());

    let body: Value = wrong_password.json();
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = create_test_app();

    let response = app.server.post("/api/auth/login").json(&json!({"email": "ash@test.com"})).await;
    let body = crate::assert_error_code!(response, StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_me_without_cookie() {
    let app = create_test_app();

    let response = app.server.get("/api/auth/me").await;
    let body = crate::assert_error_code!(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
    assert_eq!(body["error"]["message"], "Session missing");
}

#[tokio::test]
async fn test_me_ignores_authorization_header() {
    let app = create_test_app();
    let session = register_session(&app.server, "ash", "ash@test.com").await;

    let response = app
        .server
        .get("/api/auth/me")
        .add_header(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", session.token)).unwrap(),
        )
        .await;
    crate::assert_error_code!(response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
}

#[tokio::test]
async fn test_expired_and_forged_tokens_look_the_same() {
    let app = create_test_app();
    let user_id = Uuid::new_v4();

    let expired = test_codec()
        .issue_at(user_id, Utc::now() - Duration::days(7) - Duration::seconds(5))
        .unwrap();
    let forged = pokedex_server::backend::auth::sessions::TokenCodec::new("not-the-secret")
        .issue(user_id)
        .unwrap();

    let expired_response = get_me(&app.server, cookie_header(&[("token", expired.as_str())])).await;
    let forged_response = get_me(&app.server, cookie_header(&[("token", forged.as_str())])).await;

    let body = crate::assert_error_code!(expired_response, StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
    assert_eq!(body["error"]["message"], "Session invalid");
    assert_eq!(expired_response.status_code(), forged_response.status_code());
    assert_eq!(expired_response.text(), forged_response.text());
}

#[tokio::test]
async fn test_me_after_account_deleted() {
    let app = create_test_app();
    let response = register(&app.server, "ash", "ash@test.com", "pikachu1").await;
    let session = Session::from_response(&response);
    let body: Value = response.json();
    let user_id: Uuid = body["user"]["id"].as_str().unwrap().parse().unwrap();

    app.store.delete_user(user_id);

    let me = get_me(&app.server, session.cookie_header()).await;
    crate::assert_error_code!(me, StatusCode::NOT_FOUND, "USER_NOT_FOUND");
}

#[tokio::test]
async fn test_logout_clears_both_cookies() {
    let app = create_test_app();
    let session = register_session(&app.server, "ash", "ash@test.com").await;
    let (csrf_name, csrf_value) = session.csrf_header();

    let response = app
        .server
        .post("/api/auth/logout")
        .add_header(COOKIE, session.cookie_header())
        .add_header(csrf_name, csrf_value)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({"ok": true}));

    for name in ["token", "csrfToken"] {
        let cleared = response.cookie(name);
        assert_eq!(cleared.value(), "");
        assert_eq!(cleared.path(), Some("/"));
        assert_eq!(cleared.max_age(), Some(time::Duration::ZERO));
    }

    // The browser now holds empty values for both cookies.
    let cleared = cookie_header(&[("token", ""), ("csrfToken", "")]);
    let me = get_me(&app.server, cleared).await;
    crate::assert_error_code!(me, StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
}

#[tokio::test]
async fn test_ash_session_lifecycle() {
    let app = create_test_app();

    let registered = register(&app.server, "ash", " Ash@Test.COM ", "pikachu1").await;
    assert_eq!(registered.status_code(), StatusCode::CREATED);
    let registered_body: Value = registered.json();
    assert_eq!(registered_body["user"]["email"], "ash@test.com");
    let session = Session::from_response(&registered);

    let me = get_me(&app.server, session.cookie_header()).await;
    assert_eq!(me.status_code(), StatusCode::OK);
    assert_eq!(me.json::<Value>()["user"], registered_body["user"]);

    let forged_logout = app
        .server
        .post("/api/auth/logout")
        .add_header(COOKIE, session.cookie_header())
        .await;
    crate::assert_error_code!(forged_logout, StatusCode::FORBIDDEN, "CSRF_INVALID");
    assert!(forged_logout.maybe_cookie("token").is_none());

    let still_valid = get_me(&app.server, session.cookie_header()).await;
    assert_eq!(still_valid.status_code(), StatusCode::OK);

    let (csrf_name, csrf_value) = session.csrf_header();
    let logout = app
        .server
        .post("/api/auth/logout")
        .add_header(COOKIE, session.cookie_header())
        .add_header(csrf_name, csrf_value)
        .await;
    assert_eq!(logout.status_code(), StatusCode::OK);

    let after = get_me(
        &app.server,
        cookie_header(&[
            ("token", logout.cookie("token").value()),
            ("csrfToken", logout.cookie("csrfToken").value()),
        ]),
    )
    .await;
    crate::assert_error_code!(after, StatusCode::UNAUTHORIZED, "UNAUTHORIZED");
}
