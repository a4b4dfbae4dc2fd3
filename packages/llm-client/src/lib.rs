//! Pure chat-completions REST API client
//!
//! A clean, minimal client for OpenAI-compatible chat completion APIs with
//! no domain-specific logic. DeepSeek, Azure deployments, and proxies speak
//! the same wire protocol, so one client covers all of them via `base_url`.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm_client::{LlmClient, ChatRequest, Message};
//!
//! let client = LlmClient::from_env()?;
//!
//! let response = client.chat_completion(
//!     ChatRequest::new("gpt-4o-mini")
//!         .message(Message::system("You are a helpful assistant."))
//!         .message(Message::user("Hello!")),
//! ).await?;
//!
//! // DeepSeek: same protocol, different base URL
//! let deepseek = LlmClient::new(api_key)
//!     .with_base_url("https://api.deepseek.com/v1");
//! ```

pub mod error;
pub mod types;

pub use error::{LlmError, Result};
pub use types::*;

use reqwest::Client;
use tracing::{debug, warn};

/// Default base URL (OpenAI).
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat-completions API client.
#[derive(Clone)]
pub struct LlmClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    /// Create a new client with the given API key, pointed at OpenAI.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| LlmError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for DeepSeek, Azure, proxies, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set a custom HTTP client (for timeouts, proxies).
    pub fn with_client(mut self, client: Client) -> Self {
        self.http_client = client;
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Chat completion.
    ///
    /// Sends messages to the chat completions endpoint and returns the first
    /// choice. Non-2xx responses surface the provider's own error message in
    /// [`LlmError::Api`]; callers that classify failures by wording (rate
    /// limits, quota exhaustion) see exactly what the provider said.
    pub async fn chat_completion(&self, request: ChatRequest) -> Result<ChatResponse> {
        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "chat completion request failed");
                LlmError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "chat completion API error");
            return Err(LlmError::Api(Self::extract_api_error(&body)));
        }

        let raw: types::ChatResponseRaw = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let usage = raw.usage;
        let content = raw
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| LlmError::Api("No completion choices returned".into()))?;

        debug!(
            model = %request.model,
            duration_ms = start.elapsed().as_millis(),
            "chat completion"
        );

        Ok(ChatResponse { content, usage })
    }

    /// Pull the inner error message out of the API error envelope, falling
    /// back to the raw body when the envelope does not parse.
    fn extract_api_error(body: &str) -> String {
        match serde_json::from_str::<types::ApiErrorEnvelope>(body) {
            Ok(envelope) => envelope.error.message,
            Err(_) if body.is_empty() => "Empty error response".to_string(),
            Err(_) => body.to_string(),
        }
    }
}
