//! The investigation pipeline and its evidence-collection stages.
//!
//! [`engine`] drives the fixed stage order and owns the fail-soft policy;
//! the sibling modules each collect one kind of evidence and know nothing
//! about the pipeline around them.

pub mod categories;
pub mod classify;
pub mod engine;
pub mod inspect;
pub mod io;
pub mod neighbors;
pub mod origin;

pub use categories::{CategoryTable, CategoryValue};
pub use classify::{ResolvedKind, SniffedType};
pub use engine::{
    run_investigation, run_investigation_with, run_investigations, TIMESTAMP_FORMAT,
};
