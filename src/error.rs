//! Error types for u-timetable.
//!
//! "No solution" is not an error: the solver reports it as
//! [`SolverStatus::Infeasible`](crate::csp::SolverStatus::Infeasible).
//! Errors here come from the boundary: loading and validating catalogs.

use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for u-timetable operations.
#[derive(Debug, Error)]
pub enum TimetableError {
    /// The catalog failed validation.
    #[error("Invalid input: {}", summarize(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Reading a catalog file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parsing or writing catalog JSON failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for u-timetable operations.
pub type Result<T> = std::result::Result<T, TimetableError>;

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
