//! Axum route handlers for job-description summarization.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::llm_client::GenerationSource;
use crate::state::AppState;
use crate::summarize::{summarize_jd, DEFAULT_WORD_CAP};
use crate::textprep::clean_text;

#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub source: GenerationSource,
    pub summary: String,
}

/// POST /api/v1/jd/summarize
///
/// Cleans the pasted job description and summarizes it. Always succeeds for
/// non-empty input: generative failures degrade to the extractive fallback
/// and the response is tagged with its provenance.
pub async fn handle_summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    let cleaned = clean_text(&request.jd_text);
    if cleaned.is_empty() {
        return Err(AppError::Validation(
            "job description is empty; provide a valid job description".to_string(),
        ));
    }

    let outcome = summarize_jd(
        &cleaned,
        state.generator.as_ref(),
        state.config.generative_timeout(),
        DEFAULT_WORD_CAP,
    )
    .await;

    Ok(Json(SummarizeResponse {
        source: outcome.source,
        summary: outcome.text,
    }))
}
