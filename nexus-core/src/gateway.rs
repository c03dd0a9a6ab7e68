use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::models::Platform;

/// Returned when no API key is configured; no request is attempted.
pub const MISSING_KEY: &str = "API key is missing. Set GEMINI_API_KEY to enable AI features.";
/// Returned when a summarization call fails for any reason.
pub const SUMMARY_FAILED: &str = "Failed to generate summary. Please try again later.";
/// Returned when a briefing call fails for any reason.
pub const BRIEFING_FAILED: &str = "Could not generate briefing.";

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

/// Client for the external text-generation service. Both operations always
/// resolve to a plain string: generated text on success, a fixed placeholder
/// otherwise. No retries, no caching.
#[derive(Debug, Clone)]
pub struct InsightGateway {
    client: Client,
    config: GatewayConfig,
}

impl InsightGateway {
    pub fn new(client: Client, config: GatewayConfig) -> Self {
        Self { client, config }
    }

    /// Condenses one article's content into a short insight.
    pub async fn summarize(&self, text: &str, platform: Platform) -> String {
        if self.config.api_key.is_none() {
            return MISSING_KEY.to_string();
        }

        let prompt = format!(
            "You are an expert content curator. Summarize the following {platform} content \
             into a concise, 2-sentence insight. Capture the main point and any key opinion \
             or fact.\n\nContent: \"{text}\""
        );

        match self.generate(prompt).await {
            Ok(insight) => insight,
            Err(err) => {
                warn!(error = %err, "summarization failed");
                SUMMARY_FAILED.to_string()
            }
        }
    }

    /// Synthesizes a morning-briefing paragraph from recent headlines.
    pub async fn briefing(&self, titles: &[String]) -> String {
        if self.config.api_key.is_none() {
            return MISSING_KEY.to_string();
        }

        let prompt = format!(
            "Here are the latest headlines from the user's feed:\n- {}\n\nProvide a \
             \"Morning Briefing\" style paragraph (max 100 words) synthesizing the overall \
             mood and key topics of these headlines.",
            titles.join("\n- ")
        );

        match self.generate(prompt).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "briefing generation failed");
                BRIEFING_FAILED.to_string()
            }
        }
    }

    async fn generate(&self, prompt: String) -> Result<String, GatewayError> {
        let key = self
            .config
            .api_key
            .as_deref()
            .ok_or(GatewayError::MissingApiKey)?;
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        debug!(model = %self.config.model, "sending generation request");
        let response = self
            .client
            .post(url)
            .query(&[("key", key)])
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let body: GenerateResponse = response.json().await?;

        body.candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or(GatewayError::EmptyResponse)
    }
}
