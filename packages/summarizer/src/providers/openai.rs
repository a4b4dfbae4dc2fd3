//! OpenAI summary provider.
//!
//! The primary provider in the reference wiring.
//!
//! # Example
//!
//! ```rust,ignore
//! use summarizer::providers::OpenAiProvider;
//!
//! let provider = OpenAiProvider::from_env()?.with_model("gpt-4o");
//! let summary = provider.summarize(&text).await?;
//! ```

use async_trait::async_trait;
use llm_client::{ChatRequest, LlmClient, Message};

use crate::error::{ProviderError, ProviderResult};
use crate::prompts::{format_summarize_prompt, SUMMARIZE_SYSTEM_PROMPT};
use crate::providers::map_client_error;
use crate::traits::SummaryProvider;

/// OpenAI-backed summary provider.
pub struct OpenAiProvider {
    client: LlmClient,
    model: String,
}

impl OpenAiProvider {
    /// Create a new provider with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: LlmClient::new(api_key),
            model: "gpt-4o-mini".to_string(),
        }
    }

    /// Create from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> ProviderResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ProviderError::Config("OPENAI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set the chat model (default: gpt-4o-mini).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom client (for Azure, proxies, timeouts).
    pub fn with_client(mut self, client: LlmClient) -> Self {
        self.client = client;
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl SummaryProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "OpenAI"
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
