//! Error types for the expense tracker
//!
//! One enum covers the whole crate. Validation errors describe bad caller
//! input; storage errors describe a data file that could not be read or
//! written.

use std::path::Path;

use thiserror::Error;

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum ExpenseError {
    /// Caller-supplied input violates a precondition
    #[error("Validation error: {0}")]
    Validation(String),

    /// The data file exists but could not be read or decoded
    #[error("Failed to read expenses from {path}: {reason}")]
    StorageRead { path: String, reason: String },

    /// The data file could not be written
    #[error("Failed to write expenses to {path}: {reason}")]
    StorageWrite { path: String, reason: String },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside of the data file
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV serialization/deserialization errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ExpenseError {
    /// Create a read error for the data file at `path`
    pub fn storage_read(path: &Path, reason: impl ToString) -> Self {
        Self::StorageRead {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create a write error for the data file at `path`
    pub fn storage_write(path: &Path, reason: impl ToString) -> Self {
        Self::StorageWrite {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from reading or writing the data file
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::StorageRead { .. } | Self::StorageWrite { .. })
    }
}

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ExpenseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for ExpenseError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

impl From<serde_yaml::Error> for ExpenseError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type ExpenseResult<T> = Result<T, ExpenseError>;
