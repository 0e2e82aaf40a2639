#![allow(dead_code)]

use shortlink::domain::click_event::ClickEvent;
use shortlink::infrastructure::persistence::PgLinkRepository;
use shortlink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;
use uuid::Uuid;

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) -> Uuid {
    let id = Uuid::new_v4();

    sqlx::query("INSERT INTO links (id, short_code, original_url) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();

    id
}

pub async fn get_clicks(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Polls the click counter until it reaches `expected` or about two seconds pass.
pub async fn wait_for_clicks(pool: &PgPool, code: &str, expected: i64) -> i64 {
    let mut clicks = get_clicks(pool, code).await;

    for _ in 0..100 {
        if clicks >= expected {
            break;
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        clicks = get_clicks(pool, code).await;
    }

    clicks
}

pub fn create_test_repository(pool: PgPool) -> Arc<PgLinkRepository> {
    Arc::new(PgLinkRepository::new(Arc::new(pool)))
}

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<ClickEvent>) {
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(create_test_repository(pool), tx);

    (state, rx)
}
