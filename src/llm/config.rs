//! Provider configuration read from the environment

use std::time::Duration;

const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the Gemini provider
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    /// API key; a missing key surfaces as an auth failure on the first call
    pub api_key: Option<String>,
    /// Alternate base URL (proxy or local stub) replacing the public endpoint
    pub gateway: Option<String>,
    /// Whole-request timeout for the HTTP client
    pub timeout: Option<Duration>,
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("API_KEY")
                .or_else(|_| std::env::var("GEMINI_API_KEY"))
                .ok()
                .filter(|k| !k.trim().is_empty()),
            gateway: std::env::var("LLM_GATEWAY").ok(),
            timeout: std::env::var("LLM_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs),
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}
