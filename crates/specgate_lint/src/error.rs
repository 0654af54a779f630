//! Error types for the lint crate.

use thiserror::Error;

/// Result type alias for lint operations.
pub type LintResult<T> = Result<T, LintError>;

/// Errors that can occur in the lint engine.
#[derive(Error, Debug)]
pub enum LintError {
    #[error("Unknown severity: '{0}' (expected error, warning, or info)")]
    UnknownSeverity(String),

    #[error("Unknown rule category: '{0}'")]
    UnknownCategory(String),
}
