//! Investigation outcome: one full report, or one terminal error.

use super::EvidenceReport;
use crate::error::{CasefileError, Result};
use serde::{Deserialize, Serialize};

/// Error string reported for a path that does not exist.
pub const NOT_FOUND_ERROR: &str = "not found";

/// Terminal error form: a single `error` key and nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
}

/// Result of [`run_investigation`](crate::detective::run_investigation).
///
/// Serializes untagged, so the JSON is either the full report object or the
/// bare `{"error": ...}` object with no wrapper key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InvestigationOutcome {
    Report(Box<EvidenceReport>),
    Error(ErrorReport),
}

impl InvestigationOutcome {
    /// Outcome for a target path that does not exist.
    pub fn not_found() -> Self {
        InvestigationOutcome::Error(ErrorReport {
            error: NOT_FOUND_ERROR.to_string(),
        })
    }

    /// The report, when the investigation produced one.
    pub fn report(&self) -> Option<&EvidenceReport> {
        match self {
            InvestigationOutcome::Report(report) => Some(report),
            InvestigationOutcome::Error(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, InvestigationOutcome::Error(_))
    }

    /// Serialize to a JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| CasefileError::Serialization(format!("JSON serialization error: {}", e)))
    }

    /// Deserialize from a JSON string.
    pub fn from_json_str(json_str: &str) -> Result<Self> {
        serde_json::from_str(json_str)
            .map_err(|e| CasefileError::Serialization(format!("JSON deserialization error: {}", e)))
    }
}
