//! PDF text extraction trait.

use async_trait::async_trait;

use crate::error::ExtractionResult;

/// Extracts plain text from a PDF document.
///
/// Implementations fetch the document from the given URL and return its
/// full textual content. The text is transient; it lives only for the
/// duration of one summarization request.
#[async_trait]
pub trait PdfExtractor: Send + Sync {
    /// Fetch the document at `url` and extract its text.
    async fn extract_text(&self, url: &str) -> ExtractionResult<String>;
}
