//! Summarization with provider fallback.
//!
//! Tries the primary provider first and falls back to the secondary exactly
//! once, and only when the primary's failure is a rate-limit/quota
//! exhaustion. Any other provider failure is terminal.

use tracing::{error, warn};

use crate::error::ProviderError;
use crate::traits::{PdfExtractor, SummaryProvider};
use crate::types::{SummaryData, SummaryOutcome, UploadReference};

/// Summarization pipeline: extract text, call the primary provider, fall
/// back to the secondary on quota exhaustion.
///
/// Dependencies are constructed and passed in, never ambient, so any seam
/// can be substituted with a test double.
///
/// # Example
///
/// ```rust,ignore
/// use summarizer::{Summarizer, HttpPdfExtractor, OpenAiProvider, DeepSeekProvider};
///
/// let summarizer = Summarizer::new(
///     HttpPdfExtractor::new(),
///     OpenAiProvider::from_env()?,
///     DeepSeekProvider::from_env()?,
/// );
/// let outcome = summarizer.summarize(&uploads).await;
/// ```
pub struct Summarizer<X, P, F> {
    extractor: X,
    primary: P,
    fallback: F,
}

impl<X, P, F> Summarizer<X, P, F>
where
    X: PdfExtractor,
    P: SummaryProvider,
    F: SummaryProvider,
{
    /// Create a new summarizer from its three dependencies.
    pub fn new(extractor: X, primary: P, fallback: F) -> Self {
        Self {
            extractor,
            primary,
            fallback,
        }
    }

    /// Summarize the first uploaded PDF.
    ///
    /// The upload subsystem hands over a batch of upload responses; only the
    /// first is consumed. Every path returns a well-formed outcome:
    ///
    /// - empty batch or empty file URL: validation failure, no external call
    /// - extraction failure: terminal, no provider attempted
    /// - primary success: success with primary provenance
    /// - primary rate-limit/quota failure: one fallback attempt
    /// - primary failure otherwise: terminal, primary's error text surfaced
    /// - both providers failed: terminal over-quota message
    pub async fn summarize(&self, uploads: &[UploadReference]) -> SummaryOutcome {
        let Some(upload) = uploads.first() else {
            return SummaryOutcome::failure("No upload response provided.");
        };

        if upload.file_url.is_empty() {
            return SummaryOutcome::failure("No PDF URL provided.");
        }

        let text = match self.extractor.extract_text(&upload.file_url).await {
            Ok(text) => text,
            Err(e) => {
                error!(url = %upload.file_url, error = %e, "PDF extraction failed");
                return SummaryOutcome::failure("Error extracting text from PDF.");
            }
        };

        match self.primary.summarize(&text).await {
            Ok(summary) => SummaryOutcome::ok(
                format!("Summary generated by {}.", self.primary.name()),
                SummaryData { summary },
            ),
            Err(e) if is_quota_error(&e) => {
                warn!(
                    provider = self.primary.name(),
                    error = %e,
                    "primary provider over quota, falling back to {}",
                    self.fallback.name()
                );
                match self.fallback.summarize(&text).await {
                    Ok(summary) => SummaryOutcome::ok(
                        format!("Summary generated by {} (fallback).", self.fallback.name()),
                        SummaryData { summary },
                    ),
                    Err(fallback_err) => {
                        warn!(
                            provider = self.fallback.name(),
                            error = %fallback_err,
                            "fallback provider failed"
                        );
                        SummaryOutcome::failure(format!(
                            "Both {} and {} APIs are currently over quota.",
                            self.primary.name(),
                            self.fallback.name()
                        ))
                    }
                }
            }
            Err(e) => {
                SummaryOutcome::failure(format!("{} error: {}", self.primary.name(), e))
            }
        }
    }
}

/// Check whether a provider failure is a rate-limit/quota exhaustion.
///
/// Case-sensitive substring match on the providers' own error wording.
/// The upstream services are external and their error shapes are not
/// controlled here, so the match mirrors their current messages exactly
/// rather than assuming structured codes.
fn is_quota_error(error: &ProviderError) -> bool {
    let text = error.to_string();
    text.contains("Rate limit") || text.contains("quota")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quota_error() {
        let rate_limited = ProviderError::Api("Rate limit reached for gpt-4o-mini".to_string());
        assert!(is_quota_error(&rate_limited));

        let over_quota =
            ProviderError::Api("You exceeded your current quota, please check your plan and billing details.".to_string());
        assert!(is_quota_error(&over_quota));

        let bad_request = ProviderError::Api("Invalid request: messages must not be empty".to_string());
        assert!(!is_quota_error(&bad_request));

        // Match is case-sensitive; a lowercase "rate limit" does not classify.
        let lowercase = ProviderError::Api("rate limit reached".to_string());
        assert!(!is_quota_error(&lowercase));

        let network = ProviderError::Network("connection reset by peer".to_string());
        assert!(!is_quota_error(&network));
    }
}
