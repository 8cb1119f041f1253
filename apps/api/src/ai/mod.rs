//! AI enhancement client — the single point of entry for all
//! text-generation calls in Resumelift.
//!
//! ARCHITECTURAL RULE: no other module may call a generation API
//! directly. All provider interactions go through `TextGenerator`.
//!
//! Two interchangeable backends exist (Gemini, OpenAI); the binding is
//! chosen once at startup from `AI_PROVIDER` and held in `AppState`.
//! Calls are single-shot: no retry, no circuit breaker — a provider
//! failure surfaces immediately as an error response.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum AiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("provider returned an empty completion")]
    EmptyCompletion,
}

/// A single-turn text-generation backend.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>` so the provider is
/// swappable at startup and mockable in router tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends one prompt and returns the provider's completion text.
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;

    /// Provider label for startup logs and the health endpoint.
    fn name(&self) -> &'static str;
}

fn http_client() -> Client {
    Client::builder()
        .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to build HTTP client")
}

/// Extracts a human-readable message from a provider error body.
/// Both Gemini and OpenAI wrap errors as `{"error": {"message": ...}}`;
/// anything else falls back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")?
                .get("message")?
                .as_str()
                .map(|s| s.to_string())
        })
        .unwrap_or_else(|| body.to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<GeminiContent<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiContent<'a> {
    parts: Vec<GeminiPart<'a>>,
}

#[derive(Debug, Serialize)]
struct GeminiPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiCandidateContent,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiCandidatePart>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidatePart {
    text: Option<String>,
}

/// Google Generative Language `generateContent` backend.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: http_client(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let request_body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: prompt }],
            }],
        };

        let url = format!("{GEMINI_API_BASE}/{}:generateContent", self.model);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let parsed: GeminiResponse = response.json().await?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
            .filter(|t| !t.trim().is_empty())
            .ok_or(AiError::EmptyCompletion)?;

        debug!("Gemini call succeeded: {} chars returned", text.len());
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "gemini"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// OpenAI backend
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoiceMessage {
    content: Option<String>,
}

/// OpenAI `chat/completions` backend.
#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: http_client(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiClient {
    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let request_body = OpenAiRequest {
            model: &self.model,
            messages: vec![OpenAiMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Api {
                status: status.as_u16(),
                message: api_error_message(&body),
            });
        }

        let parsed: OpenAiResponse = response.json().await?;

        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|t| !t.trim().is_empty())
            .ok_or(AiError::EmptyCompletion)?;

        debug!("OpenAI call succeeded: {} chars returned", text.len());
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_message_provider_shape() {
        let body = r#"{"error": {"message": "API key not valid", "code": 400}}"#;
        assert_eq!(api_error_message(body), "API key not valid");
    }

    #[test]
    fn test_api_error_message_falls_back_to_raw_body() {
        let body = "upstream gateway timeout";
        assert_eq!(api_error_message(body), "upstream gateway timeout");
    }

    #[test]
    fn test_gemini_response_first_text_part() {
        let json = r#"{"candidates": [{"content": {"parts": [{"text": "improved resume"}]}}]}"#;
        let parsed: GeminiResponse = serde_json::from_str(json).unwrap();
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text));
        assert_eq!(text.as_deref(), Some("improved resume"));
    }

    #[test]
    fn test_openai_response_missing_choices() {
        let parsed: OpenAiResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.choices.is_empty());
    }
}
