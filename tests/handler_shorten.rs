mod common;

use axum_test::TestServer;
use serde_json::json;
use shortlink::routes::build_router;
use shortlink::utils::code_generator::{CODE_LENGTH, is_url_safe};
use sqlx::PgPool;

#[sqlx::test]
async fn test_shorten_success(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let short = json["short"].as_str().unwrap();
    assert_eq!(short.len(), CODE_LENGTH);
    assert!(is_url_safe(short));

    let stored: String = sqlx::query_scalar("SELECT original_url FROM links WHERE short_code = $1")
        .bind(short)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "https://example.com");
    assert_eq!(common::get_clicks(&pool, short).await, 0);
}

#[sqlx::test]
async fn test_shorten_same_url_twice_gives_distinct_codes(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(build_router(state)).unwrap();

    let first = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["short"], second["short"]);
    assert_eq!(common::count_links(&pool).await, 2);
}

#[sqlx::test]
async fn test_shorten_invalid_url(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_rejects_javascript_scheme(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "javascript:alert(1)" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_shorten_rejects_control_characters(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "url": "https://example.com/a\nb" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_malformed_json(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .post("/api/links")
        .bytes("{\"url\": ".into())
        .content_type("application/json")
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_shorten_missing_field(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server
        .post("/api/links")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_shorten_wrong_method(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server.get("/api/links").await;

    assert_eq!(response.status_code(), 405);
}
