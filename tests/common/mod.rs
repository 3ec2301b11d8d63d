#![allow(dead_code)]

use snaplink::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const BASE_URL: &str = "http://localhost:3000";

pub fn create_test_state(pool: PgPool) -> AppState {
    AppState::new(Arc::new(pool), BASE_URL)
}

pub async fn create_test_mapping(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO urls (original_url, short_code) VALUES ($1, $2)")
        .bind(url)
        .bind(code)
        .execute(pool)
        .await
        .unwrap();
}

/// Inserts a mapping backdated by `age_seconds`, for ordering assertions.
pub async fn create_aged_mapping(pool: &PgPool, code: &str, url: &str, age_seconds: f64) {
    sqlx::query(
        "INSERT INTO urls (original_url, short_code, created_at, updated_at)
         VALUES ($1, $2, now() - make_interval(secs => $3), now() - make_interval(secs => $3))",
    )
    .bind(url)
    .bind(code)
    .bind(age_seconds)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn get_click_count(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT click_count FROM urls WHERE short_code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn mapping_exists(pool: &PgPool, code: &str) -> bool {
    sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM urls WHERE short_code = $1)")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
