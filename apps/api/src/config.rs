use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default or is optional — startup never requires one.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional: absence runs the whole service in fallback-only mode.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on a single generative call. The behavior this service
    /// reproduces had no bound at all; see DESIGN.md.
    pub generative_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            generative_timeout_secs: std::env::var("GENERATIVE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse::<u64>()
                .context("GENERATIVE_TIMEOUT_SECS must be a number of seconds")?,
        })
    }

    pub fn generative_timeout(&self) -> Duration {
        Duration::from_secs(self.generative_timeout_secs)
    }
}
