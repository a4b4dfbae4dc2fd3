//! Persisting a finished summary for the authenticated user.

use tracing::{error, warn};

use crate::traits::{AuthResolver, CacheInvalidator, SummaryStore};
use crate::types::{NewSummary, StoreOutcome, StoredData};

/// Request to store a finished summary.
#[derive(Debug, Clone)]
pub struct StoreRequest {
    /// Caller-supplied user id. Overridden by the authenticated identity at
    /// store time; kept for API symmetry with the upload metadata.
    pub user_id: String,

    /// Original file name
    pub file_name: String,

    /// URL the PDF was fetched from
    pub file_url: String,

    /// The generated summary
    pub summary: String,
}

/// Persistence pipeline: authenticate, insert, invalidate.
///
/// The authenticated identity is authoritative: whatever `user_id` the
/// caller passed in the request is replaced by the resolver's answer before
/// the record is written.
pub struct SummaryWriter<A, S, C> {
    auth: A,
    store: S,
    invalidator: C,
}

impl<A, S, C> SummaryWriter<A, S, C>
where
    A: AuthResolver,
    S: SummaryStore,
    C: CacheInvalidator,
{
    /// Create a new writer from its three dependencies.
    pub fn new(auth: A, store: S, invalidator: C) -> Self {
        Self {
            auth,
            store,
            invalidator,
        }
    }

    /// Store a finished summary.
    ///
    /// Returns a normalized outcome on every path:
    ///
    /// - no authenticated user: failure, storage untouched
    /// - auth backend or insert failure: generic failure message (raw causes
    ///   are logged, never surfaced to the caller)
    /// - success: the view at `/summaries/{id}` is invalidated best-effort
    ///   and the outcome carries an empty data object
    pub async fn store(&self, request: &StoreRequest) -> StoreOutcome {
        let user = match self.auth.current_user().await {
            Ok(Some(user)) => user,
            Ok(None) => return StoreOutcome::failure("User not authenticated."),
            Err(e) => {
                error!(error = %e, "auth resolution failed");
                return StoreOutcome::failure("Error storing PDF summary.");
            }
        };

        let new = NewSummary {
            user_id: user.user_id,
            file_name: request.file_name.clone(),
            file_url: request.file_url.clone(),
            summary_text: request.summary.clone(),
        };

        // Invalidation is keyed by the inserted record's id, so an insert
        // failure must return before any invalidation is attempted.
        let record = match self.store.insert_summary(&new).await {
            Ok(record) => record,
            Err(e) => {
                error!(error = %e, file_name = %new.file_name, "summary insert failed");
                return StoreOutcome::failure("Error storing PDF summary.");
            }
        };

        let path = format!("/summaries/{}", record.id);
        if let Err(e) = self.invalidator.invalidate(&path).await {
            // Best-effort: the record is stored; a stale view is acceptable.
            warn!(path = %path, error = %e, "cache invalidation failed");
        }

        StoreOutcome::ok("PDF summary stored successfully.", StoredData {})
    }
}
