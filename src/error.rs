//! Error types for the casefile investigation engine.
//!
//! This module provides structured error handling using thiserror. Stage
//! helpers return these errors to the engine, which converts them into the
//! fail-soft report forms instead of propagating them to the caller.

use thiserror::Error;

/// Main error type for casefile operations.
#[derive(Debug, Error)]
pub enum CasefileError {
    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Category reference table loading or lookup errors
    #[error("Category table error: {0}")]
    CategoryTable(String),

    /// Type-specific inspection errors (executable/office/archive/sampling)
    #[error("Inspection error: {0}")]
    Inspection(String),

    /// AI consultation boundary errors
    #[error("Consultation error: {0}")]
    Consultation(String),
}

/// Result type alias for casefile operations
pub type Result<T> = std::result::Result<T, CasefileError>;
