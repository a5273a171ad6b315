#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use std::time::Duration;
use url_shortener::infrastructure::persistence::SqliteUrlStorage;
use url_shortener::routes::layered_router;
use url_shortener::state::AppState;

pub async fn create_test_storage() -> Arc<SqliteUrlStorage> {
    Arc::new(SqliteUrlStorage::in_memory().await.unwrap())
}

pub fn create_test_state(storage: Arc<SqliteUrlStorage>) -> AppState {
    AppState::new(storage)
}

/// Full middleware stack over a fresh in-memory store.
pub async fn create_test_server() -> (TestServer, Arc<SqliteUrlStorage>) {
    let storage = create_test_storage().await;
    let app = layered_router(create_test_state(storage.clone()), Duration::from_secs(5));

    (TestServer::new(app).unwrap(), storage)
}
