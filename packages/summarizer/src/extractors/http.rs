//! HTTP-based PDF text extractor.
//!
//! Fetches the document over HTTP(S) and extracts plain text from the PDF
//! bytes.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::error::{ExtractionError, ExtractionResult};
use crate::traits::PdfExtractor;

/// Extractor that downloads a PDF and pulls its text out with `pdf-extract`.
///
/// # Example
///
/// ```rust,ignore
/// use summarizer::extractors::HttpPdfExtractor;
///
/// let extractor = HttpPdfExtractor::new();
/// let text = extractor.extract_text("https://example.com/doc.pdf").await?;
/// ```
pub struct HttpPdfExtractor {
    client: reqwest::Client,
    user_agent: String,
}

impl Default for HttpPdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpPdfExtractor {
    /// Create a new extractor with default settings.
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            user_agent: "SummarizerBot/1.0".to_string(),
        }
    }

    /// Set a custom user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set a custom HTTP client.
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Fetch the raw bytes of the document.
    async fn fetch_bytes(&self, url: &str) -> ExtractionResult<Vec<u8>> {
        debug!(url = %url, "PDF fetch starting");
        let response = self
            .client
            .get(url)
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "PDF fetch failed");
                ExtractionError::Http(Box::new(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("HTTP {}", status),
            ))));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ExtractionError::Http(Box::new(e)))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl PdfExtractor for HttpPdfExtractor {
    async fn extract_text(&self, url: &str) -> ExtractionResult<String> {
        let bytes = self.fetch_bytes(url).await?;

        // pdf-extract is CPU-bound and can panic on malformed documents;
        // run it on a blocking thread and contain the panic as a parse error.
        let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
            .await
            .map_err(|e| ExtractionError::Parse(format!("extraction task failed: {}", e)))?
            .map_err(|e| ExtractionError::Parse(e.to_string()))?;

        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyDocument {
                url: url.to_string(),
            });
        }

        debug!(url = %url, chars = text.len(), "PDF text extracted");
        Ok(text)
    }
}
