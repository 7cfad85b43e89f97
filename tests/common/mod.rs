#![allow(dead_code)]

use axum::{Router, routing::get};
use axum_test::TestServer;
use std::sync::Arc;
use tinylink::api::handlers::health_handler;
use tinylink::api::routes::public_routes;
use tinylink::infrastructure::persistence::InMemoryLinkStore;
use tinylink::state::AppState;

pub const TEST_BASE_URL: &str = "https://s.example.com";

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryLinkStore::new()), TEST_BASE_URL, 10)
}

pub fn create_test_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .route("/health", get(health_handler))
        .with_state(state)
}

pub fn create_test_server() -> (TestServer, AppState) {
    let state = create_test_state();
    let server = TestServer::new(create_test_router(state.clone())).unwrap();
    (server, state)
}

pub async fn shorten_all(state: &AppState, urls: &[String]) {
    for url in urls {
        state.shortener.shorten(url).await.unwrap();
    }
}
