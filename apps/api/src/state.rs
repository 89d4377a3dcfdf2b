use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::TextGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// The optional generative capability. `None` runs every feature on its
    /// scripted or extractive fallback path.
    pub generator: Option<Arc<dyn TextGenerator>>,
}
