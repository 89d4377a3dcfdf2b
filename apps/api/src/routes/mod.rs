pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{enhance, ingest, letter, summarize};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/documents/extract",
            post(ingest::handlers::handle_extract),
        )
        .route(
            "/api/v1/jd/summarize",
            post(summarize::handlers::handle_summarize),
        )
        .route(
            "/api/v1/resumes/enhance",
            post(enhance::handlers::handle_enhance),
        )
        .route("/api/v1/letters", post(letter::handlers::handle_letter))
        .with_state(state)
}
