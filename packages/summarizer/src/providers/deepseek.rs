//! DeepSeek summary provider.
//!
//! The fallback provider in the reference wiring. DeepSeek's API is
//! OpenAI-compatible, so this is the same client pointed at a different
//! base URL.

use async_trait::async_trait;
use llm_client::{ChatRequest, LlmClient, Message};

use crate::error::{ProviderError, ProviderResult};
use crate::prompts::{format_summarize_prompt, SUMMARIZE_SYSTEM_PROMPT};
use crate::providers::map_client_error;
use crate::traits::SummaryProvider;

const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com/v1";

/// DeepSeek-backed summary provider.
pub struct DeepSeekProvider {
    client: LlmClient,
    model: String,
}

impl DeepSeekProvider {
    /// Create a new provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: LlmClient::new(api_key).with_base_url(DEEPSEEK_BASE_URL),
            model: "deepseek-chat".to_string(),
        }
    }

    /// Create from environment variable `DEEPSEEK_API_KEY`.
    pub fn from_env() -> ProviderResult<Self> {
        let api_key = std::env::var("DEEPSEEK_API_KEY")
            .map_err(|_| ProviderError::Config("DEEPSEEK_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set the chat model (default: deepseek-chat).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl SummaryProvider for DeepSeekProvider {
    fn name(&self) -> &str {
        "DeepSeek"
    }

    async fn summarize(&self, text: &str) -> ProviderResult<String> {
        let request = ChatRequest::new(&self.model)
            .message(Message::system(SUMMARIZE_SYSTEM_PROMPT))
            .message(Message::user(format_summarize_prompt(text)))
            .temperature(0.7)
            .max_tokens(1500);

        let response = self
            .client
            .chat_completion(request)
            .await
            .map_err(map_client_error)?;

        Ok(response.content)
    }
}
