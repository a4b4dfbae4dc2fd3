//! In-memory storage implementation for testing and development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::StorageResult;
use crate::traits::SummaryStore;
use crate::types::{NewSummary, SummaryRecord};

/// In-memory summary store.
///
/// Useful for testing and development. Not suitable for production as data
/// is lost on restart.
#[derive(Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<Uuid, SummaryRecord>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all stored records.
    pub fn clear(&self) {
        self.records.write().unwrap().clear();
    }

    /// Number of stored records.
    pub fn record_count(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

#[async_trait]
impl SummaryStore for MemoryStore {
    async fn insert_summary(&self, new: &NewSummary) -> StorageResult<SummaryRecord> {
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
        let mut records: Vec<_> = self
            .records
            .read()
            .unwrap()
            .values()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(records)
    }
}
