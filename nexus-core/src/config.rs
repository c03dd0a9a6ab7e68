use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Access to the text-generation API. The key is read once from the
/// environment at startup; its absence is a handled state, not an error.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: "https://generativelanguage.googleapis.com".into(),
            model: "gemini-3-flash-preview".into(),
        }
    }
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());
        if api_key.is_none() {
            warn!("GEMINI_API_KEY is not set; AI features will return placeholder text");
        }
        Self {
            api_key,
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }
}

/// Tunables for the refresh cycle and the briefing input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub batch_size: usize,
    pub refresh_latency_ms: u64,
    pub briefing_headlines: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            batch_size: 24,
            refresh_latency_ms: 800,
            briefing_headlines: 10,
        }
    }
}

impl DashboardConfig {
    pub fn refresh_latency(&self) -> Duration {
        Duration::from_millis(self.refresh_latency_ms)
    }

    /// Loads from a JSON file, falling back to defaults on any problem.
    pub fn from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(err) => {
                    warn!(error = %err, path = %path.display(), "failed to parse dashboard config");
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
