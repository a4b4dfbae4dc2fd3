//! Summary provider implementations.
//!
//! Both providers are thin wrappers over the shared chat-completions client;
//! DeepSeek speaks the same wire protocol as OpenAI at a different base URL.

pub mod deepseek;
pub mod openai;

pub use deepseek::DeepSeekProvider;
pub use openai::OpenAiProvider;

use llm_client::LlmError;

use crate::error::ProviderError;

/// Map a client error into the provider boundary error.
///
/// `Api` messages pass through verbatim; the fallback controller
/// classifies quota exhaustion by the provider's own wording.
pub(crate) fn map_client_error(error: LlmError) -> ProviderError {
    match error {
        LlmError::Api(message) => ProviderError::Api(message),
        LlmError::Network(message) => ProviderError::Network(message),
        LlmError::Parse(message) => ProviderError::Parse(message),
        LlmError::Config(message) => ProviderError::Config(message),
    }
}
