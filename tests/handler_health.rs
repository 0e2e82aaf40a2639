mod common;

use axum_test::TestServer;
use shortlink::routes::build_router;
use sqlx::PgPool;

#[sqlx::test]
async fn test_liveness(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server.get("/healthz").await;

    response.assert_status_ok();
    response.assert_text("OK");
}

#[sqlx::test]
async fn test_readiness_success(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server.get("/api/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert_eq!(json["checks"]["click_queue"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[sqlx::test]
async fn test_readiness_degraded_when_click_queue_closed(pool: PgPool) {
    let (state, rx) = common::create_test_state(pool);
    drop(rx);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server.get("/api/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["click_queue"]["status"], "error");
}

#[sqlx::test]
async fn test_unknown_api_path_is_json_404(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(build_router(state)).unwrap();

    let response = server.get("/api/nothing/here").await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<serde_json::Value>()["error"]["code"],
        "not_found"
    );
}
