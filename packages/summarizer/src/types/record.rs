//! Persisted summary records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Insert payload for a new summary record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewSummary {
    /// Authenticated owner of the record
    pub user_id: String,

    /// Original file name
    pub file_name: String,

    /// URL the PDF was fetched from
    pub file_url: String,

    /// The generated summary
    pub summary_text: String,
}

/// A persisted summary. Created exactly once per successful
/// summarize-and-store request; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    /// Store-assigned identifier
    pub id: Uuid,

    /// Owner
    pub user_id: String,

    /// Original file name
    pub file_name: String,

    /// URL the PDF was fetched from
    pub file_url: String,

    /// The generated summary
    pub summary_text: String,

    /// When the record was inserted
    pub created_at: DateTime<Utc>,
}
