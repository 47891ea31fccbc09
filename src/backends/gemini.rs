//! Gemini generateContent client
//!
//! Minimal non-streaming client for the Google generative language API. The
//! pipeline has no retry logic and no timeout governance of its own: one
//! request, one response, and any failure is reported as a typed error for
//! the caller to fold into the review body.

use log::error;
use serde_json::{json, Value};
use std::env;

/// Model used when none is specified
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Production endpoint base
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable carrying the API credential
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Environment variable overriding the endpoint base (used by tests)
pub const BASE_URL_ENV: &str = "GEMINI_BASE_URL";

/// Startup configuration problems
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
}

/// Failures of a generation request
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("response contained no generated text")]
    Empty,
}

/// Explicit client configuration; no ambient lookups happen past this point.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GeminiConfig {
    /// Build a configuration from the process environment.
    ///
    /// The API key is required; the base URL may be overridden for tests.
    pub fn from_env(model: &str) -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url =
            env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model: model.to_string(),
        })
    }
}

/// Client for the generateContent endpoint
pub struct GeminiClient {
    client: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Submit a prompt and return the generated text verbatim.
    pub async fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.model,
            self.config.api_key
        );

        let body = json!({
            "contents": [{
                "parts": [{"text": prompt}]
            }]
        });

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::Transport(format!("{}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = body_text.chars().take(200).collect::<String>();
            error!("gemini error {}: {}", status.as_u16(), message);
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| GeminiError::Transport(format!("{}", e)))?;

        extract_text(&value).ok_or(GeminiError::Empty)
    }
}

/// Pull the generated text out of a generateContent response.
///
/// The first candidate's text parts are concatenated; an absent candidate,
/// absent parts, or all-empty text yields None.
fn extract_text(response: &Value) -> Option<String> {
    let parts = response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;

    let text: String = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
