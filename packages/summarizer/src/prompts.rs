//! LLM prompts for summarization.

/// System prompt shared by all summary providers.
pub const SUMMARIZE_SYSTEM_PROMPT: &str = "You are a document summarizer. \
Given the full text of a PDF document, write a clear natural-language summary. \
Capture the document's purpose, its main points, and any conclusions or \
action items. Write flowing prose, not a bullet list, and do not add \
information that is not in the document.";

/// Cap on document characters sent to a provider. Oversized documents are
/// truncated rather than rejected.
pub const MAX_DOCUMENT_CHARS: usize = 48_000;

/// Build the user prompt for a document.
pub fn format_summarize_prompt(text: &str) -> String {
    let text = truncate_document(text);
    format!("Summarize the following document:\n\n{}", text)
}

/// Truncate to [`MAX_DOCUMENT_CHARS`] on a char boundary.
fn truncate_document(text: &str) -> &str {
    if text.len() <= MAX_DOCUMENT_CHARS {
        return text;
    }
    let mut end = MAX_DOCUMENT_CHARS;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
