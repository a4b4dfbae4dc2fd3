//! Summary provider trait.

use async_trait::async_trait;

use crate::error::ProviderResult;

/// An LLM provider that turns document text into a summary.
///
/// Implementations wrap specific providers (OpenAI, DeepSeek, etc.) and
/// handle prompting and response parsing. The provider's `name` appears in
/// outcome messages as provenance text; callers never branch on it.
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Human-readable provider name for provenance messages.
    fn name(&self) -> &str;

    /// Generate a summary of the given document text.
    ///
    /// Rate-limit and quota failures must surface the provider's own error
    /// wording in the returned [`ProviderError`](crate::error::ProviderError);
    /// the fallback controller classifies failures by that text.
    async fn summarize(&self, text: &str) -> ProviderResult<String>;
}
