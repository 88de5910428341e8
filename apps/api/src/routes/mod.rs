pub mod health;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::transform::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/transform", post(handlers::handle_transform))
        .with_state(state)
}
