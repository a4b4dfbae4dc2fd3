//! Cache invalidation trait.

use async_trait::async_trait;

use crate::error::InvalidationError;

/// Best-effort cache/view invalidation signal.
///
/// Fired after a successful store so downstream views re-render with fresh
/// data. Failures are logged by the caller and never affect the stored
/// result.
#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    /// Invalidate the cached view at `path` (e.g. `/summaries/{id}`).
    async fn invalidate(&self, path: &str) -> Result<(), InvalidationError>;
}
