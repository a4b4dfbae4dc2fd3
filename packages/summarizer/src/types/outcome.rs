//! The normalized outcome contract.
//!
//! Every public pipeline operation returns the same three-field shape:
//! `{ success: bool, message: String, data: object|null }`. Success and
//! failure travel through the same type; callers branch on `success` and
//! `data`, while `message` carries human-readable provenance and
//! diagnostics only.

use serde::{Deserialize, Serialize};

/// Normalized result of a public pipeline operation.
///
/// Invariant: `success == data.is_some()`. The [`Outcome::ok`] and
/// [`Outcome::failure`] constructors are the only way the pipeline builds
/// values, so a success without data (or vice versa) cannot be constructed
/// through them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<T> {
    /// Whether the operation succeeded
    pub success: bool,

    /// Human-readable provenance or diagnostic text
    pub message: String,

    /// Payload on success, `null` on failure
    pub data: Option<T>,
}

impl<T> Outcome<T> {
    /// Build a success outcome carrying data.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Build a failure outcome with no data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }

    /// Whether this outcome is a success.
    pub fn is_success(&self) -> bool {
        self.success
    }
}

/// Payload of a successful summarization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryData {
    /// The generated summary text
    pub summary: String,
}

/// Outcome of a summarization request.
pub type SummaryOutcome = Outcome<SummaryData>;

/// Payload of a successful store operation. Intentionally empty; the record
/// id is not part of the wire contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoredData {}

/// Outcome of a store request.
pub type StoreOutcome = Outcome<StoredData>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_carries_data() {
        let outcome = SummaryOutcome::ok(
            "Summary generated by OpenAI.",
            SummaryData {
                summary: "A short summary.".to_string(),
            },
        );
        assert!(outcome.is_success());
        assert_eq!(outcome.data.unwrap().summary, "A short summary.");
    }

    #[test]
    fn test_failure_has_null_data() {
        let outcome = SummaryOutcome::failure("No PDF URL provided.");
        assert!(!outcome.is_success());
        assert!(outcome.data.is_none());
    }

    #[test]
    fn test_success_serializes_with_data_object() {
        let outcome = SummaryOutcome::ok(
            "Summary generated by OpenAI.",
            SummaryData {
                summary: "Text".to_string(),
            },
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["summary"], "Text");
    }

    #[test]
    fn test_failure_serializes_with_null_data() {
        let outcome = SummaryOutcome::failure("Error extracting text from PDF.");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Error extracting text from PDF.");
        assert!(json["data"].is_null());
    }

    #[test]
    fn test_store_success_serializes_empty_data_object() {
        let outcome = StoreOutcome::ok("PDF summary stored successfully.", StoredData {});
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["data"], serde_json::json!({}));
    }
}
