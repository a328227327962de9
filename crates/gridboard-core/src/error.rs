//! Error types for gridboard-core

use thiserror::Error;

/// Result type alias using [`GridError`]
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors that can occur in gridboard-core
#[derive(Debug, Error)]
pub enum GridError {
    /// Invalid cell position format
    #[error("Invalid cell position: {0}")]
    InvalidPosition(String),

    /// Invalid cell range format
    #[error("Invalid cell range: {0}")]
    InvalidRange(String),

    /// Row index out of bounds
    #[error("Row index {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index out of bounds
    #[error("Column index {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u16, u16),

    /// Merged region conflict
    #[error("Range {0} overlaps an existing merged region")]
    MergeConflict(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl GridError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        GridError::Other(msg.into())
    }
}
