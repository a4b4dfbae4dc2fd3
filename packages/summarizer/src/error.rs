//! Typed errors for the summarization library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) with one enum per
//! collaborator boundary. Each component converts foreign errors into its
//! own enum at the call site; the pipeline entry points convert boundary
//! errors into outcomes and let nothing escape.

use thiserror::Error;

/// Errors from PDF text extraction.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Fetching the document failed (network error or non-2xx status)
    #[error("HTTP error fetching PDF: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The document could not be parsed as a PDF
    #[error("unreadable PDF: {0}")]
    Parse(String),

    /// The PDF parsed but contained no extractable text
    #[error("no extractable text in PDF: {url}")]
    EmptyDocument { url: String },
}

/// Errors from an LLM summary provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider's API rejected the request. Carries the provider's own
    /// error message verbatim; fallback classification inspects this text.
    #[error("{0}")]
    Api(String),

    /// Network-level failure reaching the provider
    #[error("network error: {0}")]
    Network(String),

    /// The provider's response could not be parsed
    #[error("malformed provider response: {0}")]
    Parse(String),

    /// Provider misconfiguration (missing API key, bad settings)
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors from the authentication resolver.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The auth backend failed (distinct from "no authenticated user")
    #[error("auth backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from the summary store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Query or constraint failure
    #[error("database error: {0}")]
    Database(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Could not reach the database
    #[error("connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors from cache invalidation.
#[derive(Debug, Error)]
pub enum InvalidationError {
    /// The revalidation endpoint rejected or never received the signal
    #[error("invalidation request failed: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for extraction operations.
pub type ExtractionResult<T> = std::result::Result<T, ExtractionError>;

/// Result type alias for provider operations.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Result type alias for storage operations.
pub type StorageResult<T> = std::result::Result<T, StorageError>;
