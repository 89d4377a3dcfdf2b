//! Resume enhancement — rewrites a resume to align with a summarized JD.
//!
//! Unlike summarization there is no extractive rewrite to degrade to:
//! a result either comes from the generative capability or the failure is
//! surfaced to the caller.

pub mod handlers;
pub mod prompts;

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::textprep::{clean_text, count_tokens};

use crate::enhance::prompts::{ENHANCE_PROMPT_TEMPLATE, ENHANCE_SYSTEM};

/// Combined naive-token budget for resume + JD summary. Inputs beyond this
/// are rejected before any generative call is attempted.
pub const TOKEN_BUDGET: usize = 2048;

/// Rewrites a resume against a summarized job description.
///
/// Both inputs are cleaned first; the budget check runs on the cleaned text
/// with the same naive token count the rest of the service uses.
pub async fn enhance_resume(
    resume_text: &str,
    jd_summary: &str,
    generator: Option<&Arc<dyn TextGenerator>>,
    timeout: Duration,
) -> Result<String, AppError> {
    let resume = clean_text(resume_text);
    let summary = clean_text(jd_summary);

    if resume.is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }
    if summary.is_empty() {
        return Err(AppError::Validation(
            "jd_summary cannot be empty".to_string(),
        ));
    }

    let combined = count_tokens(&resume) + count_tokens(&summary);
    if combined > TOKEN_BUDGET {
        return Err(AppError::Validation(format!(
            "combined inputs are {combined} tokens, over the {TOKEN_BUDGET} budget; \
             shorten the resume or job description"
        )));
    }

    let generator = generator
        .ok_or_else(|| AppError::Llm("no generative capability configured".to_string()))?;

    let prompt = ENHANCE_PROMPT_TEMPLATE
        .replace("{jd_summary}", &summary)
        .replace("{resume_text}", &resume);

    let enhanced = tokio::time::timeout(timeout, generator.generate(&prompt, ENHANCE_SYSTEM))
        .await
        .map_err(|_| AppError::Llm(format!("rewrite timed out after {}s", timeout.as_secs())))?
        .map_err(|e| AppError::Llm(format!("rewrite failed: {e}")))?;

    info!(tokens_in = combined, "resume enhanced");
    Ok(enhanced)
}
