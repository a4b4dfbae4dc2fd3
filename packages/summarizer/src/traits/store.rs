//! Summary storage trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StorageResult;
use crate::types::{NewSummary, SummaryRecord};

/// Durable store for summary records.
///
/// Insert returns the full stored record including its store-assigned id;
/// downstream cache invalidation is keyed by that id. Records are immutable
/// once inserted.
#[async_trait]
pub trait SummaryStore: Send + Sync {
    /// Insert a new summary record, returning the stored record with its id.
    async fn insert_summary(&self, new: &NewSummary) -> StorageResult<SummaryRecord>;

    /// Fetch a record by id.
    async fn get_summary(&self, id: Uuid) -> StorageResult<Option<SummaryRecord>>;

    /// All records owned by a user, newest first.
    async fn summaries_for_user(&self, user_id: &str) -> StorageResult<Vec<SummaryRecord>>;
}
