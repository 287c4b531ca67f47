//! Gemini Engine Implementation
//!
//! Answer engine backed by the Google Generative Language REST API.
//!
//! # Gemini API
//!
//! One endpoint covers everything the HUD asks for:
//! - `/v1beta/models/{model}:generateContent` - generate an answer
//! - `/v1beta/models` - list models (used for the health check)
//!
//! Grounded requests attach the `google_search` tool; the service then
//! returns grounding metadata with web source chunks, which we lift into
//! [`Citation`] values.
//!
//! The API key is held as an `Option` and checked lazily on first use, so a
//! machine without `GEMINI_API_KEY` starts fine and fails per-call instead.

use std::time::Duration;

use async_trait::async_trait;

use super::traits::{Answer, AnswerEngine, AnswerRequest, Citation};
use crate::config::HudConfig;
use crate::error::EngineError;

/// Model used when neither config nor environment names one
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Gemini answer engine client
#[derive(Clone)]
pub struct GeminiEngine {
    /// API key, absent until the environment provides one
    api_key: Option<String>,
    /// Model identifier
    model: String,
    /// Service base URL, overridable for tests
    base_url: String,
    /// HTTP client
    http_client: reqwest::Client,
}

impl GeminiEngine {
    /// Create a new engine client
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.is_empty()),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Create from loaded configuration
    #[must_use]
    pub fn from_config(config: &HudConfig) -> Self {
        Self::new(config.api_key.clone(), config.model.clone())
    }

    /// Create from environment variables alone
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").ok();
        let model = std::env::var("VISOR_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Self::new(api_key, model)
    }

    /// Override the service base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Get the generate endpoint URL
    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Get the models endpoint URL
    fn models_url(&self) -> String {
        format!("{}/v1beta/models", self.base_url)
    }

    /// POST a generate request and return the decoded JSON body
    async fn post_generate(
        &self,
        key: &str,
        body: &serde_json::Value,
    ) -> anyhow::Result<serde_json::Value> {
        let response = self
            .http_client
            .post(self.generate_url())
            .header("x-goog-api-key", key)
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini returned {status}: {body}");
        }

        Ok(response.json().await?)
    }
}

impl Default for GeminiEngine {
    fn default() -> Self {
        Self::from_env()
    }
}

#[async_trait]
impl AnswerEngine for GeminiEngine {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn health_check(&self) -> bool {
        let Some(key) = self.api_key.as_deref() else {
            return false;
        };

        self.http_client
            .get(self.models_url())
            .header("x-goog-api-key", key)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .map(|response| response.status().is_success())
            .unwrap_or(false)
    }

    async fn ask(&self, request: &AnswerRequest) -> Result<Answer, EngineError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| EngineError::service("GEMINI_API_KEY is not set"))?;

        let body = build_request_body(request);
        let data = self.post_generate(key, &body).await?;

        let text = extract_text(&data)
            .ok_or_else(|| EngineError::malformed("response carried no candidate text"))?;

        // Grounding disabled means citations are empty by contract, whatever
        // metadata the service decides to attach.
        let citations = if request.grounding {
            extract_citations(&data)
        } else {
            Vec::new()
        };

        Ok(Answer { text, citations })
    }
}

/// Build the generateContent request body
fn build_request_body(request: &AnswerRequest) -> serde_json::Value {
    let mut body = serde_json::json!({
        "contents": [{
            "parts": [{ "text": request.prompt }]
        }]
    });

    if request.grounding {
        body["tools"] = serde_json::json!([{ "google_search": {} }]);
    }

    body
}

/// Concatenate the candidate's text parts
fn extract_text(data: &serde_json::Value) -> Option<String> {
    let parts = data
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

/// Lift grounding metadata web chunks into citations
///
/// Chunks without a `web` object carry nothing displayable and are skipped.
/// Entries with an empty link are kept here; the search commit path decides
/// what is resolvable enough to show.
fn extract_citations(data: &serde_json::Value) -> Vec<Citation> {
    data.get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("groundingMetadata"))
        .and_then(|m| m.get("groundingChunks"))
        .and_then(serde_json::Value::as_array)
        .map(|chunks| {
            chunks
                .iter()
                .filter_map(|chunk| {
                    let web = chunk.get("web")?;
                    let title = web.get("title").and_then(|t| t.as_str()).unwrap_or_default();
                    let uri = web.get("uri").and_then(|u| u.as_str()).unwrap_or_default();
                    Some(Citation::new(title, uri))
                })
                .collect()
        })
        .unwrap_or_default()
}
