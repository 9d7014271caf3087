pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs;
use crate::pipeline;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/jobs", get(jobs::handlers::handle_list_jobs))
        .route(
            "/api/resume",
            post(pipeline::handlers::handle_analyze_resume)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}
