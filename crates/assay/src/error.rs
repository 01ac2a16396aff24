//! Error types for the assay library.

use thiserror::Error;

use crate::table::StorageType;

/// Main error type for assay operations.
#[derive(Debug, Error)]
pub enum AssayError {
    /// Columns of a table must all have the same length.
    #[error("column '{column}' has {actual} values, expected {expected}")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Column names within a table must be unique.
    #[error("duplicate column name '{0}'")]
    DuplicateColumn(String),

    /// A value does not match the column's declared storage type.
    #[error("value at row {row} of column '{column}' does not match storage type {storage}")]
    StorageMismatch {
        column: String,
        row: usize,
        storage: StorageType,
    },

    /// A validity mapper referenced a column that does not exist.
    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    /// A validity check returned the wrong number of verdicts.
    #[error("validity check for column '{column}' returned {actual} verdicts, expected {expected}")]
    ShapeMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for assay operations.
pub type Result<T> = std::result::Result<T, AssayError>;
