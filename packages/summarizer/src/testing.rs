//! Testing utilities including mock implementations.
//!
//! These are useful for testing applications that use the summarization
//! pipeline without making real provider or network calls. Every mock
//! records its calls so tests can assert on exactly which collaborators
//! were touched.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::{
    AuthError, ExtractionError, ExtractionResult, InvalidationError, ProviderError,
    ProviderResult, StorageError, StorageResult,
};
use crate::traits::{
    AuthResolver, AuthUser, CacheInvalidator, PdfExtractor, SummaryProvider, SummaryStore,
};
use crate::types::{NewSummary, SummaryRecord};

// =============================================================================
// MockExtractor
// =============================================================================

/// A mock PDF extractor returning predefined text by URL.
///
/// Mocks are cheap to clone; clones share call-tracking state, so tests can
/// hand one clone to the pipeline and assert on the other.
#[derive(Clone, Default)]
pub struct MockExtractor {
    /// Predefined text by URL
    texts: Arc<RwLock<HashMap<String, String>>>,

    /// URLs that should fail
    fail_urls: Arc<RwLock<Vec<String>>>,

    /// Call tracking for assertions
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockExtractor {
    /// Create a new mock extractor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add predefined text for a URL.
    pub fn with_text(self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.write().unwrap().insert(url.into(), text.into());
        self
    }

    /// Mark a URL as failing.
    pub fn fail_url(self, url: impl Into<String>) -> Self {
        self.fail_urls.write().unwrap().push(url.into());
        self
    }

    /// URLs this mock was asked to extract.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of extraction calls made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl PdfExtractor for MockExtractor {
    async fn extract_text(&self, url: &str) -> ExtractionResult<String> {
        self.calls.write().unwrap().push(url.to_string());

        if self.fail_urls.read().unwrap().contains(&url.to_string()) {
            return Err(ExtractionError::Parse("mock extraction failure".into()));
        }

        Ok(self
            .texts
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .unwrap_or_else(|| format!("Extracted text of {}", url)))
    }
}

// =============================================================================
// MockProvider
// =============================================================================

/// A mock summary provider with a fixed response or failure.
#[derive(Clone)]
pub struct MockProvider {
    name: String,

    /// Summary to return, or the error message to fail with
    response: Result<String, String>,

    /// Call tracking: the texts this provider was asked to summarize
    calls: Arc<RwLock<Vec<String>>>,
}

impl MockProvider {
    /// Provider that always succeeds with the given summary.
    pub fn succeeding(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            response: Ok(summary.into()),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Provider that always fails with an API error carrying `message`.
    pub fn failing(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            response: Err(message.into()),
            calls: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Texts this provider was asked to summarize.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// Number of summarize calls made.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }
}

#[async_trait]
impl SummaryProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn summarize(&self, text: &str) -> ProviderResult<String> {
        self.calls.write().unwrap().push(text.to_string());

        match &self.response {
            Ok(summary) => Ok(summary.clone()),
            Err(message) => Err(ProviderError::Api(message.clone())),
        }
    }
}

// =============================================================================
// MockAuthResolver
// =============================================================================

/// A mock auth resolver with a configurable identity.
#[derive(Clone, Default)]
pub struct MockAuthResolver {
    user: Option<AuthUser>,
    fail: bool,
    calls: Arc<RwLock<usize>>,
}

impl MockAuthResolver {
    /// Resolver answering with the given user.
    pub fn authenticated(user_id: impl Into<String>) -> Self {
        Self {
            user: Some(AuthUser::new(user_id)),
            fail: false,
            calls: Arc::new(RwLock::new(0)),
        }
    }

    /// Resolver answering "no authenticated user".
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Resolver whose backend fails.
    pub fn failing() -> Self {
        Self {
            user: None,
            fail: true,
            calls: Arc::new(RwLock::new(0)),
        }
    }

    /// Number of resolution calls made.
    pub fn call_count(&self) -> usize {
        *self.calls.read().unwrap()
    }
}

#[async_trait]
impl AuthResolver for MockAuthResolver {
    async fn current_user(&self) -> Result<Option<AuthUser>, AuthError> {
        *self.calls.write().unwrap() += 1;

        if self.fail {
            return Err(AuthError::Backend(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "mock auth backend down",
            ))));
        }

        Ok(self.user.clone())
    }
}

// =============================================================================
// MockStore
// =============================================================================

/// A mock summary store backed by a map, with an optional failure mode.
#[derive(Clone, Default)]
pub struct MockStore {
    records: Arc<RwLock<HashMap<Uuid, SummaryRecord>>>,
    fail_inserts: bool,

    /// Call tracking: payloads of insert attempts
    insert_calls: Arc<RwLock<Vec<NewSummary>>>,
}

impl MockStore {
    /// Create a new working store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose inserts fail.
    pub fn failing() -> Self {
        Self {
            fail_inserts: true,
            ..Default::default()
        }
    }

    /// Insert payloads this store received.
    pub fn insert_calls(&self) -> Vec<NewSummary> {
        self.insert_calls.read().unwrap().clone()
    }

    /// Number of insert attempts made.
    pub fn insert_count(&self) -> usize {
        self.insert_calls.read().unwrap().len()
    }
}

#[async_trait]
impl SummaryStore for MockStore {
    async fn insert_summary(&self, new: &NewSummary) -> StorageResult<SummaryRecord> {
        self.insert_calls.write().unwrap().push(new.clone());

        if self.fail_inserts {
            return Err(StorageError::Database(Box::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "mock insert failure",
            ))));
        }

        let record = SummaryRecord {
            id: Uuid::new_v4(),
            user_id: new.user_id.clone(),
            file_name: new.file_name.clone(),
            file_url: new.file_url.clone(),
            summary_text: new.summary_text.clone(),
            created_at: Utc::now(),
        };
        self.records
            .write()
            .unwrap()
            .insert(record.id, record.clone());
        Ok(record)
    }

    async fn get_summary(&self, id: Uuid) -> StorageResult<Option<SummaryRecord>> {
        Ok(self.records.read().unwrap().get(&id).cloned())
    }

    async fn summaries_for_user(&self, user_id: &str) -> StorageResult<Vec<SummaryRecord>> {
        Ok(self
            .records
            .read()
            .unwrap()
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect())
    }
}

// =============================================================================
// MockInvalidator
// =============================================================================

/// A mock cache invalidator recording the paths it was asked to invalidate.
#[derive(Clone, Default)]
pub struct MockInvalidator {
    fail: bool,
    paths: Arc<RwLock<Vec<String>>>,
}

impl MockInvalidator {
    /// Create a new working invalidator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an invalidator whose calls fail.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Paths this invalidator received.
    pub fn paths(&self) -> Vec<String> {
        self.paths.read().unwrap().clone()
    }

    /// Number of invalidation calls made.
    pub fn call_count(&self) -> usize {
        self.paths.read().unwrap().len()
    }
}

#[async_trait]
impl CacheInvalidator for MockInvalidator {
    async fn invalidate(&self, path: &str) -> Result<(), InvalidationError> {
        self.paths.write().unwrap().push(path.to_string());

        if self.fail {
            return Err(InvalidationError::Http(Box::new(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "mock invalidation failure",
            ))));
        }

        Ok(())
    }
}
