//! Integration tests for the summarization and persistence pipelines.
//!
//! These tests verify the full fallback workflow against call-tracking
//! mocks: which collaborators are invoked, in what circumstances, and the
//! exact outcome shape returned on every path.

use summarizer::testing::{
    MockAuthResolver, MockExtractor, MockInvalidator, MockProvider, MockStore,
};
use summarizer::{StoreRequest, Summarizer, SummaryStore, SummaryWriter, UploadReference};

const DOC_URL: &str = "https://uploads.example.com/doc.pdf";

fn upload() -> UploadReference {
    UploadReference::new("user_42", DOC_URL, "doc.pdf")
}

fn summarizer_with(
    extractor: &MockExtractor,
    primary: &MockProvider,
    fallback: &MockProvider,
) -> Summarizer<MockExtractor, MockProvider, MockProvider> {
    Summarizer::new(extractor.clone(), primary.clone(), fallback.clone())
}

// =============================================================================
// Validation
// =============================================================================

#[tokio::test]
async fn test_empty_upload_batch_fails_without_any_external_call() {
    let extractor = MockExtractor::new();
    let primary = MockProvider::succeeding("OpenAI", "unused");
    let fallback = MockProvider::succeeding("DeepSeek", "unused");
    let summarizer = summarizer_with(&extractor, &primary, &fallback);

    let outcome = summarizer.summarize(&[]).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "No upload response provided.");
    assert!(outcome.data.is_none());
    assert_eq!(extractor.call_count(), 0);
    assert_eq!(primary.call_count(), 0);
    assert_eq!(fallback.call_count(), 0);
}

#[tokio::test]
async fn test_empty_file_url_fails_without_any_external_call() {
    let extractor = MockExtractor::new();
    let primary = MockProvider::succeeding("OpenAI", "unused");
    let fallback = MockProvider::succeeding("DeepSeek", "unused");
    let summarizer = summarizer_with(&extractor, &primary, &fallback);

    let outcome = summarizer
        .summarize(&[UploadReference::new("user_42", "", "doc.pdf")])
        .await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "No PDF URL provided.");
    assert_eq!(extractor.call_count(), 0);
    assert_eq!(primary.call_count(), 0);
}

// =============================================================================
// Extraction failure
// =============================================================================

#[tokio::test]
async fn test_extraction_failure_is_terminal_and_calls_no_provider() {
    let extractor = MockExtractor::new().fail_url(DOC_URL);
    let primary = MockProvider::succeeding("OpenAI", "unused");
    let fallback = MockProvider::succeeding("DeepSeek", "unused");
    let summarizer = summarizer_with(&extractor, &primary, &fallback);

    let outcome = summarizer.summarize(&[upload()]).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Error extracting text from PDF.");
    assert!(outcome.data.is_none());
    assert_eq!(primary.call_count(), 0);
    assert_eq!(fallback.call_count(), 0);
}

// =============================================================================
// Primary provider
// =============================================================================

#[tokio::test]
async fn test_primary_success_never_touches_fallback() {
    let extractor = MockExtractor::new().with_text(DOC_URL, "Lorem ipsum...");
    let primary = MockProvider::succeeding("OpenAI", "A primary summary.");
    let fallback = MockProvider::succeeding("DeepSeek", "unused");
    let summarizer = summarizer_with(&extractor, &primary, &fallback);

    let outcome = summarizer.summarize(&[upload()]).await;

    assert!(outcome.success);
    assert_eq!(outcome.message, "Summary generated by OpenAI.");
    assert_eq!(outcome.data.unwrap().summary, "A primary summary.");
    assert_eq!(fallback.call_count(), 0);

    // The provider saw the extracted text
    assert_eq!(primary.calls(), vec!["Lorem ipsum...".to_string()]);
}

#[tokio::test]
async fn test_non_quota_primary_failure_is_terminal_with_provider_text() {
    let extractor = MockExtractor::new();
    let primary = MockProvider::failing("OpenAI", "Invalid request: context length exceeded");
    let fallback = MockProvider::succeeding("DeepSeek", "unused");
    let summarizer = summarizer_with(&extractor, &primary, &fallback);

    let outcome = summarizer.summarize(&[upload()]).await;

    assert!(!outcome.success);
    assert_eq!(
        outcome.message,
        "OpenAI error: Invalid request: context length exceeded"
    );
    assert!(outcome.data.is_none());
    assert_eq!(fallback.call_count(), 0);
}

#[tokio::test]
async fn test_lowercase_rate_limit_does_not_trigger_fallback() {
    let extractor = MockExtractor::new();
    let primary = MockProvider::failing("OpenAI", "rate limit reached");
    let fallback = MockProvider::succeeding("DeepSeek", "unused");
    let summarizer = summarizer_with(&extractor, &primary, &fallback);

    let outcome = summarizer.summarize(&[upload()]).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "OpenAI error: rate limit reached");
    assert_eq!(fallback.call_count(), 0);
}

// =============================================================================
// Fallback
// =============================================================================

#[tokio::test]
async fn test_rate_limit_failure_falls_back_to_secondary() {
    let extractor = MockExtractor::new().with_text(DOC_URL, "Lorem ipsum...");
    let primary = MockProvider::failing("OpenAI", "Rate limit exceeded");
    let fallback = MockProvider::succeeding("DeepSeek", "A short summary.");
    let summarizer = summarizer_with(&extractor, &primary, &fallback);

    let outcome = summarizer.summarize(&[upload()]).await;

    assert!(outcome.success);
    assert_eq!(outcome.message, "Summary generated by DeepSeek (fallback).");
    assert_eq!(outcome.data.unwrap().summary, "A short summary.");

    // Both providers were given the same extracted text
    assert_eq!(primary.calls(), fallback.calls());
}

#[tokio::test]
async fn test_quota_failure_falls_back_to_secondary() {
    let extractor = MockExtractor::new();
    let primary = MockProvider::failing(
        "OpenAI",
        "You exceeded your current quota, please check your plan and billing details.",
    );
    let fallback = MockProvider::succeeding("DeepSeek", "A short summary.");
    let summarizer = summarizer_with(&extractor, &primary, &fallback);

    let outcome = summarizer.summarize(&[upload()]).await;

    assert!(outcome.success);
    assert_eq!(outcome.message, "Summary generated by DeepSeek (fallback).");
}

#[tokio::test]
async fn test_both_providers_failing_reports_over_quota() {
    let extractor = MockExtractor::new();
    let primary = MockProvider::failing("OpenAI", "Rate limit exceeded");
    let fallback = MockProvider::failing("DeepSeek", "Rate limit exceeded");
    let summarizer = summarizer_with(&extractor, &primary, &fallback);

    let outcome = summarizer.summarize(&[upload()]).await;

    assert!(!outcome.success);
    assert_eq!(
        outcome.message,
        "Both OpenAI and DeepSeek APIs are currently over quota."
    );
    assert!(outcome.data.is_none());
    assert_eq!(primary.call_count(), 1);
    assert_eq!(fallback.call_count(), 1);
}

#[tokio::test]
async fn test_over_quota_message_even_when_fallback_fails_differently() {
    let extractor = MockExtractor::new();
    let primary = MockProvider::failing("OpenAI", "Rate limit exceeded");
    let fallback = MockProvider::failing("DeepSeek", "Invalid API key provided");
    let summarizer = summarizer_with(&extractor, &primary, &fallback);

    let outcome = summarizer.summarize(&[upload()]).await;

    // The terminal message is fixed regardless of the fallback's root cause.
    assert!(!outcome.success);
    assert_eq!(
        outcome.message,
        "Both OpenAI and DeepSeek APIs are currently over quota."
    );
}

// =============================================================================
// Persistence
// =============================================================================

fn store_request() -> StoreRequest {
    StoreRequest {
        user_id: "caller_supplied".to_string(),
        file_name: "doc.pdf".to_string(),
        file_url: DOC_URL.to_string(),
        summary: "A short summary.".to_string(),
    }
}

#[tokio::test]
async fn test_store_unauthenticated_never_touches_storage() {
    let store = MockStore::new();
    let invalidator = MockInvalidator::new();
    let writer = SummaryWriter::new(
        MockAuthResolver::anonymous(),
        store.clone(),
        invalidator.clone(),
    );

    let outcome = writer.store(&store_request()).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "User not authenticated.");
    assert_eq!(store.insert_count(), 0);
    assert_eq!(invalidator.call_count(), 0);
}

#[tokio::test]
async fn test_store_uses_authenticated_identity_not_caller_supplied() {
    let store = MockStore::new();
    let writer = SummaryWriter::new(
        MockAuthResolver::authenticated("user_42"),
        store.clone(),
        MockInvalidator::new(),
    );

    let outcome = writer.store(&store_request()).await;

    assert!(outcome.success);
    assert_eq!(outcome.message, "PDF summary stored successfully.");
    let inserts = store.insert_calls();
    assert_eq!(inserts.len(), 1);
    assert_eq!(inserts[0].user_id, "user_42");
}

#[tokio::test]
async fn test_store_success_invalidates_record_path() {
    let store = MockStore::new();
    let invalidator = MockInvalidator::new();
    let writer = SummaryWriter::new(
        MockAuthResolver::authenticated("user_42"),
        store.clone(),
        invalidator.clone(),
    );

    let outcome = writer.store(&store_request()).await;
    assert!(outcome.success);

    // Invalidation is keyed by the id the store assigned
    let records = store.summaries_for_user("user_42").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(
        invalidator.paths(),
        vec![format!("/summaries/{}", records[0].id)]
    );
}

#[tokio::test]
async fn test_store_insert_failure_skips_invalidation() {
    let store = MockStore::failing();
    let invalidator = MockInvalidator::new();
    let writer = SummaryWriter::new(
        MockAuthResolver::authenticated("user_42"),
        store.clone(),
        invalidator.clone(),
    );

    let outcome = writer.store(&store_request()).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Error storing PDF summary.");
    assert_eq!(invalidator.call_count(), 0);
}

#[tokio::test]
async fn test_store_auth_backend_failure_reports_generic_error() {
    let store = MockStore::new();
    let writer = SummaryWriter::new(MockAuthResolver::failing(), store.clone(), MockInvalidator::new());

    let outcome = writer.store(&store_request()).await;

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Error storing PDF summary.");
    assert_eq!(store.insert_count(), 0);
}

#[tokio::test]
async fn test_invalidation_failure_does_not_undo_stored_success() {
    let store = MockStore::new();
    let invalidator = MockInvalidator::failing();
    let writer = SummaryWriter::new(
        MockAuthResolver::authenticated("user_42"),
        store.clone(),
        invalidator.clone(),
    );

    let outcome = writer.store(&store_request()).await;

    assert!(outcome.success);
    assert_eq!(outcome.message, "PDF summary stored successfully.");
    assert_eq!(invalidator.call_count(), 1);
}

// =============================================================================
// End to end: summarize then store
// =============================================================================

#[tokio::test]
async fn test_summarize_then_store_roundtrip() {
    let extractor = MockExtractor::new().with_text(DOC_URL, "Lorem ipsum...");
    let primary = MockProvider::failing("OpenAI", "Rate limit exceeded");
    let fallback = MockProvider::succeeding("DeepSeek", "A short summary.");
    let summarizer = summarizer_with(&extractor, &primary, &fallback);

    let outcome = summarizer.summarize(&[upload()]).await;
    assert!(outcome.success);
    let summary = outcome.data.unwrap().summary;

    let store = MockStore::new();
    let writer = SummaryWriter::new(
        MockAuthResolver::authenticated("user_42"),
        store.clone(),
        MockInvalidator::new(),
    );
    let stored = writer
        .store(&StoreRequest {
            user_id: "user_42".to_string(),
            file_name: "doc.pdf".to_string(),
            file_url: DOC_URL.to_string(),
            summary: summary.clone(),
        })
        .await;
    assert!(stored.success);

    // Re-fetching by id reproduces what was supplied
    let records = store.summaries_for_user("user_42").await.unwrap();
    assert_eq!(records.len(), 1);
    let record = store.get_summary(records[0].id).await.unwrap().unwrap();
    assert_eq!(record.file_name, "doc.pdf");
    assert_eq!(record.file_url, DOC_URL);
    assert_eq!(record.summary_text, "A short summary.");
    assert_eq!(record.summary_text, summary);
}
