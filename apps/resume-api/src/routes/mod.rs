pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/process-resume",
            post(handlers::handle_process_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route(
            "/api/generate-resume",
            post(handlers::handle_generate_from_draft),
        )
        .route(
            "/api/generate-cover-letter",
            post(handlers::handle_cover_letter),
        )
        .route("/api/mock-interview", post(handlers::handle_mock_interview))
        .route("/api/job-suggestions", post(handlers::handle_job_suggestions))
        .route("/api/faq", get(handlers::handle_faq))
        .with_state(state)
}
