//! Axum route handlers for resume enhancement.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::enhance::enhance_resume;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EnhanceRequest {
    pub resume_text: String,
    pub jd_summary: String,
}

#[derive(Debug, Serialize)]
pub struct EnhanceResponse {
    pub enhanced_resume: String,
}

/// POST /api/v1/resumes/enhance
///
/// Rewrites the resume against the summarized JD. Generative failures are
/// surfaced here — there is no fallback rewrite.
pub async fn handle_enhance(
    State(state): State<AppState>,
    Json(request): Json<EnhanceRequest>,
) -> Result<Json<EnhanceResponse>, AppError> {
    let enhanced = enhance_resume(
        &request.resume_text,
        &request.jd_summary,
        state.generator.as_ref(),
        state.config.generative_timeout(),
    )
    .await?;

    Ok(Json(EnhanceResponse {
        enhanced_resume: enhanced,
    }))
}
