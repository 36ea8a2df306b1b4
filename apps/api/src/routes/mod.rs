pub mod health;
pub mod index;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::jobs::handlers::handle_search_jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(index::index_handler))
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resumes/analyze",
            post(handle_analyze).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/api/v1/jobs/search", post(handle_search_jobs))
        .with_state(state)
}
