//! Upload metadata handed over by the upload subsystem.

use serde::{Deserialize, Serialize};

/// Reference to an uploaded PDF.
///
/// Produced by the upload subsystem after a file lands in object storage;
/// consumed once per summarization request and not retained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadReference {
    /// Id of the user who uploaded the file
    pub user_id: String,

    /// Publicly fetchable URL of the uploaded PDF
    pub file_url: String,

    /// Original file name, for display and record keeping
    pub file_name: String,
}

impl UploadReference {
    /// Create a new upload reference.
    pub fn new(
        user_id: impl Into<String>,
        file_url: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            file_url: file_url.into(),
            file_name: file_name.into(),
        }
    }
}
