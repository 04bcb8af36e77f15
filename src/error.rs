use thiserror::Error;

/// Errors produced while interpreting or enumerating a schedule.
///
/// Both kinds are recoverable per expression: the caller logs them, skips
/// the expression, and keeps going. Fatal I/O errors are not represented
/// here; they surface as `anyhow` errors at the binary level.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("malformed expression '{expression}': {reason}")]
    MalformedExpression { expression: String, reason: String },

    #[error("'{expression}' never matches a future time within the search horizon")]
    Unsatisfiable { expression: String },
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
