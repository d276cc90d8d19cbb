//! Error types for the mini-job engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading configuration,
//! validating monthly input and transferring ledger data.

use thiserror::Error;

/// The main error type for the mini-job engine.
///
/// Every error is recoverable at the call site; none of them leaves caller
/// state half-mutated.
///
/// # Example
///
/// ```
/// use minijob_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/limits.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/limits.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or holds inconsistent values.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A monthly input or overage event violated one of its invariants.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An import was rejected because required columns are absent.
    #[error("Missing required columns: {}", columns.join(", "))]
    MissingColumns {
        /// Every missing column name, in the order they are expected.
        columns: Vec<String>,
    },

    /// A row of imported data could not be interpreted.
    #[error("Malformed record at row {row}, column '{column}': {message}")]
    MalformedRecord {
        /// The 1-based data row number (header excluded).
        row: usize,
        /// The offending column.
        column: String,
        /// A description of the problem.
        message: String,
    },

    /// More overage events than the transfer format can carry.
    #[error("Too many overage events: {count} recorded, at most {max} can be exported")]
    TooManyOverageEvents {
        /// Number of events in the log.
        count: usize,
        /// Number of slots in the format.
        max: usize,
    },

    /// Reading or writing transfer data failed below the record level.
    #[error("Transfer error: {message}")]
    TransferError {
        /// A description of the failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    /// Shorthand for an [`EngineError::InvalidInput`].
    pub(crate) fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl From<csv::Error> for EngineError {
    fn from(error: csv::Error) -> Self {
        EngineError::TransferError {
            message: error.to_string(),
        }
    }
}
