//! PDF Summarization Library
//!
//! Extracts text from an uploaded PDF, summarizes it with an LLM provider,
//! and persists the result for an authenticated user. When the primary
//! provider is rate-limited or over quota, the pipeline transparently
//! retries once with a secondary provider.
//!
//! # Design Philosophy
//!
//! - Every external collaborator (extraction, providers, auth, storage,
//!   invalidation) sits behind a trait and is passed in explicitly
//! - Public operations return one normalized `{success, message, data}`
//!   outcome shape on every path; no error crosses the pipeline boundary
//! - Provider provenance travels as message text, never as a typed field
//! - Fallback fires on quota exhaustion only, exactly once, never a loop
//!
//! # Usage
//!
//! ```rust,ignore
//! use summarizer::{
//!     DeepSeekProvider, HttpPdfExtractor, MemoryStore, NoopInvalidator,
//!     OpenAiProvider, StaticAuthResolver, Summarizer, SummaryWriter,
//! };
//!
//! // Summarize an uploaded PDF, falling back to DeepSeek on quota errors
//! let summarizer = Summarizer::new(
//!     HttpPdfExtractor::new(),
//!     OpenAiProvider::from_env()?,
//!     DeepSeekProvider::from_env()?,
//! );
//! let outcome = summarizer.summarize(&uploads).await;
//!
//! // Persist the finished summary for the authenticated user
//! let writer = SummaryWriter::new(
//!     StaticAuthResolver::authenticated("user_42"),
//!     MemoryStore::new(),
//!     NoopInvalidator,
//! );
//! let stored = writer.store(&request).await;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (extractor, provider, auth, store, invalidator)
//! - [`types`] - Domain types and the normalized outcome contract
//! - [`pipeline`] - The fallback summarizer and persistence writer
//! - [`providers`] - OpenAI and DeepSeek provider implementations
//! - [`extractors`] - HTTP PDF text extractor
//! - [`stores`] - Storage implementations (MemoryStore, PostgresStore)
//! - [`testing`] - Call-tracking mocks for every seam

pub mod auth;
pub mod error;
pub mod extractors;
pub mod invalidators;
pub mod pipeline;
pub mod prompts;
pub mod providers;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{
    AuthError, ExtractionError, InvalidationError, ProviderError, StorageError,
};
pub use traits::{
    AuthResolver, AuthUser, CacheInvalidator, PdfExtractor, SummaryProvider, SummaryStore,
};
pub use types::{
    NewSummary, Outcome, StoreOutcome, StoredData, SummaryData, SummaryOutcome, SummaryRecord,
    UploadReference,
};

// Re-export pipeline entry points
pub use pipeline::{StoreRequest, Summarizer, SummaryWriter};

// Re-export implementations
pub use auth::StaticAuthResolver;
pub use extractors::HttpPdfExtractor;
pub use invalidators::{NoopInvalidator, WebhookInvalidator};
pub use providers::{DeepSeekProvider, OpenAiProvider};
pub use stores::MemoryStore;

#[cfg(feature = "postgres")]
pub use stores::PostgresStore;
