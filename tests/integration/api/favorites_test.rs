//! Favorites API integration tests

use axum::http::{header::COOKIE, StatusCode};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::*;

async fn add(server: &TestServer, session: &Session, body: Value) -> axum_test::TestResponse {
    let (csrf_name, csrf_value) = session.csrf_header();
    server
        .post("/api/favorites")
        .add_header(COOKIE, session.cookie_header())
        .add_header(csrf_name, csrf_value)
        .json(&body)
        .await
}

async fn remove(server: &TestServer, session: &Session, id: &str) -> axum_test::TestResponse {
    let (csrf_name, csrf_value) = session.csrf_header();
    server
        .delete(&format!("/api/favorites/{id}"))
        .add_header(COOKIE, session.cookie_header())
        .add_header(csrf_name, csrf_value)
        .await
}

async fn list(server: &TestServer, session: &Session) -> Value {
    let response = server
        .get("/api/favorites")
        .add_header(COOKIE, session.cookie_header())
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}

#[tokio::test]
async fn test_favorites_roundtrip() {
    let app = create_test_app();
    let session = register_session(&app.server, "ash", "ash@test.com").await;

    assert_eq!(list(&app.server, &session).await, json!([]));

    let added = add(&app.server, &session, json!({"id": 25})).await;
    assert_eq!(added.status_code(), StatusCode::CREATED);
    assert_eq!(added.json::<Value>(), json!({"id": 25}));

    add(&app.server, &session, json!({"id": 133})).await;
    assert_eq!(list(&app.server, &session).await, json!([25, 133]));

    let removed = remove(&app.server, &session, "25").await;
    assert_eq!(removed.status_code(), StatusCode::OK);
    assert_eq!(removed.json::<Value>(), json!({"id": 25}));
    assert_eq!(list(&app.server, &session).await, json!([133]));

    let me = get_me(&app.server, session.cookie_header()).await;
    assert_eq!(me.json::<Value>()["user"]["favorites"], json!([133]));
}

#[tokio::test]
async fn test_add_duplicate_favorite() {
    let app = create_test_app();
    let session = register_session(&app.server, "ash", "ash@test.com").await;

    add(&app.server, &session, json!({"id": 25})).await;
    let again = add(&app.server, &session, json!({"id": 25})).await;
    crate::assert_error_code!(again, StatusCode::CONFLICT, "DUPLICATE_KEY");
}

#[tokio::test]
async fn test_add_integral_float_id() {
    let app = create_test_app();
    let session = register_session(&app.server, "ash", "ash@test.com").await;

    let added = add(&app.server, &session, json!({"id": 25.0})).await;
    assert_eq!(added.status_code(), StatusCode::CREATED);
    assert_eq!(added.json::<Value>(), json!({"id": 25}));
    assert_eq!(list(&app.server, &session).await, json!([25]));
}

#[tokio::test]
async fn test_add_invalid_id() {
    let app = create_test_app();
    let session = register_session(&app.server, "ash", "ash@test.com").await;

    for body in [json!({"id": 0}), json!({"id": "pikachu"}), json!({})] {
        let response = add(&app.server, &session, body).await;
        crate::assert_error_code!(response, StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_remove_invalid_and_absent() {
    let app = create_test_app();
    let session = register_session(&app.server, "ash", "ash@test.com").await;

    let invalid = remove(&app.server, &session, "-3").await;
    crate::assert_error_code!(invalid, StatusCode::BAD_REQUEST, "INVALID_ID");

    let absent = remove(&app.server, &session, "25").await;
    crate::assert_error_code!(absent, StatusCode::NOT_FOUND, "NOT_FOUND");
}

#[tokio::test]
async fn test_favorites_are_per_user() {
    let app = create_test_app();
    let ash = register_session(&app.server, "ash", "ash@test.com").await;
    let misty = register_session(&app.server, "misty", "misty@test.com").await;

    add(&app.server, &ash, json!({"id": 25})).await;

    assert_eq!(list(&app.server, &ash).await, json!([25]));
    assert_eq!(list(&app.server, &misty).await, json!([]));
}
