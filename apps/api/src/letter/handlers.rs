//! Axum route handlers for cover-letter drafting.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::letter::draft_cover_letter;
use crate::llm_client::GenerationSource;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LetterRequest {
    pub resume_text: String,
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct LetterResponse {
    pub source: GenerationSource,
    pub cover_letter: String,
}

/// POST /api/v1/letters
///
/// Drafts a cover letter. Generative failures degrade to the scripted
/// letter; only missing inputs produce an error.
pub async fn handle_letter(
    State(state): State<AppState>,
    Json(request): Json<LetterRequest>,
) -> Result<Json<LetterResponse>, AppError> {
    let letter = draft_cover_letter(
        &request.resume_text,
        &request.jd_text,
        state.generator.as_ref(),
        state.config.generative_timeout(),
    )
    .await?;

    Ok(Json(LetterResponse {
        source: letter.source,
        cover_letter: letter.text,
    }))
}
