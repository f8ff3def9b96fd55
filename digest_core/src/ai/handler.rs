use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use super::dto::{
    default_safety_settings, Content, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Part, SafetySetting,
};
use crate::helpers::config::AppConfig;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("request to model provider failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("model provider returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response from model provider: {0}")]
    InvalidResponse(String),
}

#[derive(Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
    generation_config: GenerationConfig,
    safety_settings: Vec<SafetySetting>,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Result<Self, ModelError> {
        Self::with_timeout(config, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(config: &AppConfig, timeout: Duration) -> Result<Self, ModelError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            api_key: config.api_key().to_string(),
            model: config.model().to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
            generation_config: GenerationConfig::default(),
            safety_settings: default_safety_settings(),
        })
    }

    /// Points the client at another host, e.g. a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    pub fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: self.generation_config,
            safety_settings: self.safety_settings.clone(),
        }
    }

    /// Sends one prompt and returns the first candidate's text. No retries.
    pub async fn generate(&self, prompt: &str, request_id: &str) -> Result<String, ModelError> {
        log::info!(
            "[{}] Calling {} with a {} char prompt",
            request_id,
            self.model,
            prompt.chars().count()
        );

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .header(REQUEST_ID_HEADER, request_id)
            .json(&self.build_request(prompt))
            .send()
            .await
            // the url carries the api key
            .map_err(|e| ModelError::Transport(e.without_url()))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("[{}] Model provider returned {}: {}", request_id, status, body);
            return Err(ModelError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ModelError::Transport(e.without_url()))?;

        let parsed = serde_json::from_str::<GenerateContentResponse>(&body)
            .map_err(|e| ModelError::InvalidResponse(e.to_string()))?;

        extract_text(parsed)
    }
}

pub fn extract_text(response: GenerateContentResponse) -> Result<String, ModelError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or(ModelError::InvalidResponse("no candidates".to_string()))?;

    let finish_reason = candidate.finish_reason.unwrap_or_default();

    let text = candidate
        .content
        .and_then(|content| content.parts.into_iter().next())
        .and_then(|part| part.text)
        .ok_or_else(|| {
            ModelError::InvalidResponse(format!(
                "candidate has no text (finish reason: {})",
                if finish_reason.is_empty() { "none" } else { finish_reason.as_str() }
            ))
        })?;

    if text.trim().is_empty() {
        return Err(ModelError::InvalidResponse("empty text".to_string()));
    }

    Ok(text)
}
