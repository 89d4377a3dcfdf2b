//! Cover-letter drafting — generative with a scripted fallback letter, so
//! the endpoint degrades instead of failing when the capability is away.

pub mod handlers;
pub mod prompts;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::{GenerationSource, TextGenerator};
use crate::textprep::clean_text;

use crate::letter::prompts::{LETTER_PROMPT_TEMPLATE, LETTER_SYSTEM, SCRIPTED_LETTER_TEMPLATE};

/// A drafted letter plus its provenance tag.
#[derive(Debug, Clone, Serialize)]
pub struct CoverLetter {
    pub source: GenerationSource,
    pub text: String,
}

/// Drafts a cover letter from a resume and a job description.
///
/// Requires both inputs to be present; beyond that it never fails on the
/// generative path — absence, failure, and timeout all degrade to the
/// scripted letter template.
pub async fn draft_cover_letter(
    resume_text: &str,
    jd_text: &str,
    generator: Option<&Arc<dyn TextGenerator>>,
    timeout: Duration,
) -> Result<CoverLetter, AppError> {
    if resume_text.trim().is_empty() || jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume and job description must both be provided".to_string(),
        ));
    }

    let resume = clean_text(resume_text);
    let jd = clean_text(jd_text);

    if let Some(generator) = generator {
        let prompt = LETTER_PROMPT_TEMPLATE
            .replace("{jd_text}", &jd)
            .replace("{resume_text}", &resume);

        match tokio::time::timeout(timeout, generator.generate(&prompt, LETTER_SYSTEM)).await {
            Ok(Ok(text)) => {
                return Ok(CoverLetter {
                    source: GenerationSource::Generated,
                    text,
                });
            }
            Ok(Err(e)) => {
                warn!(error = %e, "generative letter failed, using scripted letter");
            }
            Err(_) => {
                warn!(
                    timeout_secs = timeout.as_secs(),
                    "generative letter timed out, using scripted letter"
                );
            }
        }
    }

    Ok(CoverLetter {
        source: GenerationSource::Fallback,
        text: SCRIPTED_LETTER_TEMPLATE.replace("{jd_text}", &jd),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use crate::llm_client::LlmError;

    struct SuccessGenerator;

    #[async_trait]
    impl TextGenerator for SuccessGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Ok("Dear Hiring Manager, generated letter.".to_string())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str, _system: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    #[tokio::test]
    async fn missing_inputs_are_rejected() {
        let result = draft_cover_letter("", "a job", None, Duration::from_secs(5)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = draft_cover_letter("a resume", "  ", None, Duration::from_secs(5)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn generative_path_is_tagged_generated() {
        let generator: Arc<dyn TextGenerator> = Arc::new(SuccessGenerator);

        let letter = draft_cover_letter("resume", "job", Some(&generator), Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(letter.source, GenerationSource::Generated);
        assert_eq!(letter.text, "Dear Hiring Manager, generated letter.");
    }

    #[tokio::test]
    async fn absent_capability_uses_scripted_letter() {
        let letter = draft_cover_letter(
            "ten years of Rust",
            "Senior engineer: build   reliable  services",
            None,
            Duration::from_secs(5),
        )
        .await
        .unwrap();

        assert_eq!(letter.source, GenerationSource::Fallback);
        assert!(letter.text.starts_with("Dear Hiring Manager,"));
        // The scripted letter inlines the cleaned job description.
        assert!(letter.text.contains("Senior engineer: build reliable services"));
    }

    #[tokio::test]
    async fn failing_capability_degrades_to_scripted_letter() {
        let generator: Arc<dyn TextGenerator> = Arc::new(FailingGenerator);

        let letter = draft_cover_letter("resume", "job", Some(&generator), Duration::from_secs(5))
            .await
            .unwrap();

        assert_eq!(letter.source, GenerationSource::Fallback);
        assert!(letter.text.ends_with("[Your Name]"));
    }
}
