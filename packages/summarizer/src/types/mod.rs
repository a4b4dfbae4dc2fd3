//! Domain data types.

pub mod outcome;
pub mod record;
pub mod upload;

pub use outcome::{Outcome, StoreOutcome, StoredData, SummaryData, SummaryOutcome};
pub use record::{NewSummary, SummaryRecord};
pub use upload::UploadReference;
