//! Casefile turns a path on disk into a structured evidence report.
//!
//! One call to [`run_investigation`] runs a fixed pipeline of evidence
//! stages over the target and returns the whole report. Only a missing
//! target ends an investigation early; every other stage failure degrades
//! to a neutral value in place, so the report shape stays predictable.

/// Optional AI consultation over a finished report
pub mod consult;
/// Investigation pipeline and evidence-collection stages
pub mod detective;
/// Structured error handling
pub mod error;
/// Bounded SHA-256 content hashing
pub mod hashing;
/// Tracing subscriber setup
pub mod logging;
/// Evidence report data model
pub mod report;

pub use detective::{
    run_investigation, run_investigation_with, run_investigations, CategoryTable,
};
pub use error::{CasefileError, Result};
pub use report::{EvidenceReport, InvestigationOutcome};
