//! Job-description summarization — one generative attempt, then the
//! deterministic extractive fallback.
//!
//! Contract: `summarize_jd` never fails outward. Capability absence,
//! invocation failure, and timeout are all logged and recovered by
//! `fallback_summarize`; callers always get a string back, tagged with its
//! provenance.

pub mod fallback;
pub mod handlers;
pub mod prompts;

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::llm_client::{GenerationSource, TextGenerator};
use crate::summarize::fallback::fallback_summarize;
use crate::summarize::prompts::{SUMMARIZE_PROMPT_TEMPLATE, SUMMARIZE_SYSTEM};

pub use fallback::DEFAULT_WORD_CAP;

/// A summary plus its provenance tag.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryOutcome {
    pub source: GenerationSource,
    pub text: String,
}

/// Summarizes a job description.
///
/// The injected generative capability is tried exactly once, bounded by
/// `timeout` — the behavior this reproduces had no bound at all, so the
/// timeout is a hardening addition (see DESIGN.md). There is no retry of the
/// generative path: any failure goes straight to the extractive fallback.
pub async fn summarize_jd(
    text: &str,
    generator: Option<&Arc<dyn TextGenerator>>,
    timeout: Duration,
    max_words: usize,
) -> SummaryOutcome {
    let Some(generator) = generator else {
        debug!("no generative capability configured, using extractive fallback");
        return SummaryOutcome {
            source: GenerationSource::Fallback,
            text: fallback_summarize(text, max_words),
        };
    };

    let prompt = SUMMARIZE_PROMPT_TEMPLATE.replace("{jd_text}", text);

    match tokio::time::timeout(timeout, generator.generate(&prompt, SUMMARIZE_SYSTEM)).await {
        Ok(Ok(summary)) => SummaryOutcome {
            source: GenerationSource::Generated,
            text: summary,
        },
        Ok(Err(e)) => {
            warn!(error = %e, "generative summarization failed, falling back");
            SummaryOutcome {
                source: GenerationSource::Fallback,
                text: fallback_summarize(text, max_words),
            }
        }
        Err(_) => {
            warn!(
                timeout_secs = timeout.as_secs(),
                "generative summarization timed out, falling back"
            );
            SummaryOutcome {
                source: GenerationSource::Fallback,
                text: fallback_summarize(text, max_words),
            }
        }
    }
}
