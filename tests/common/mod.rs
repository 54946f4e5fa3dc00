#![allow(dead_code)]

use minilink::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), None)
}

pub fn create_test_state_with_public_url(pool: SqlitePool, public_url: &str) -> AppState {
    AppState::new(Arc::new(pool), Some(public_url.to_string()))
}

pub async fn create_test_link(pool: &SqlitePool, code: &str, target: &str) {
    sqlx::query("INSERT INTO links (code, target) VALUES (?1, ?2)")
        .bind(code)
        .bind(target)
        .execute(pool)
        .await
        .unwrap();
}
