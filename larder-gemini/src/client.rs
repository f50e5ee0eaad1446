use serde_json::Value;
use tracing::{debug, instrument};

use crate::convert::{build_request_body, error_message, parse_response};
use crate::error::GeminiError;
use crate::types::GeneratedContent;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini `generateContent` API.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Creates a new client with the given API key.
    ///
    /// An empty key is accepted; the service rejects it on first use.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), api_key, base_url)
    }

    /// Creates a client on top of a preconfigured HTTP client (proxies,
    /// timeouts, TLS settings).
    pub fn with_http_client(
        http: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a single-turn prompt to `model`.
    #[instrument(skip(self, prompt), fields(prompt_len = prompt.len()))]
    pub async fn generate_content(
        &self,
        model: &str,
        prompt: &str,
    ) -> Result<GeneratedContent, GeminiError> {
        let body = build_request_body(prompt);

        debug!("Sending request to Gemini");

        let response = self
            .http
            .post(format!("{}/models/{}:generateContent", self.base_url, model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let raw = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<Value>(&raw)
                .ok()
                .and_then(|body| error_message(&body))
                .unwrap_or_else(|| {
                    if raw.trim().is_empty() {
                        "Unknown error".to_string()
                    } else {
                        raw.trim().to_string()
                    }
                });
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response_body: Value = serde_json::from_str(&raw)?;

        debug!("Received successful response");

        parse_response(&response_body)
    }
}
