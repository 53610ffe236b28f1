pub mod health;

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::{goods, projects};
use crate::state::AppState;

/// All versioned API routes, mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/goods", post(goods::create).get(goods::list))
        .route("/goods/{id}", patch(goods::update).delete(goods::remove))
        .route("/goods/{id}/reprioritize", patch(goods::reprioritize))
        .route("/projects", post(projects::create))
        .route("/projects/{id}", get(projects::get_by_id))
}
