//! Shared harness for HTTP integration tests.
//!
//! Builds the application router through the same [`build_app_router`]
//! used by `main.rs`, so tests exercise the production middleware stack
//! (CORS, request ID, timeout, tracing, panic recovery). The cache is an
//! in-memory backend and the event bus has no consumers attached.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use goodstack_api::config::ServerConfig;
use goodstack_api::router::build_app_router;
use goodstack_api::state::AppState;
use goodstack_cache::MemoryCache;
use goodstack_catalog::{GoodService, PgGoodStore};
use goodstack_events::EventBus;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        archive_database_url: String::new(),
        redis_url: String::new(),
    }
}

/// Build the full application router over the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();

    let goods = Arc::new(GoodService::new(
        Arc::new(PgGoodStore::new(pool.clone())),
        Arc::new(MemoryCache::new()),
        Arc::new(EventBus::default()),
    ));

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        goods,
    };

    build_app_router(state, &config)
}

/// Send a GET request and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a request with a JSON body and return the raw response.
pub async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a bodyless request (DELETE and friends) and return the response.
pub async fn send(app: Router, method: Method, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
