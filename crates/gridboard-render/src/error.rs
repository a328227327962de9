//! Error types for gridboard-render

use thiserror::Error;

/// Result type alias using [`RenderError`]
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while rendering a table
#[derive(Debug, Error)]
pub enum RenderError {
    /// Table has no columns
    #[error("Table has no columns")]
    NoColumns,

    /// Two columns share a key
    #[error("Duplicate column key: {0}")]
    DuplicateColumnKey(String),

    /// A summary operation targets a key no column declares
    #[error("Summary operation references unknown column: {0}")]
    UnknownSummaryColumn(String),

    /// Unrecognized value format name
    #[error("Unknown value format: {0}")]
    UnknownFormat(String),

    /// Consecutive rows share a mapped group key
    #[error("Rows with group key '{0}' are not tiled into a single spanned row")]
    SpanPartition(String),

    /// A split title needs more columns than the table has
    #[error("Split title requires at least 3 columns, table has {0}")]
    TitleSplitTooWide(u16),

    /// Grid surface failure
    #[error(transparent)]
    Grid(#[from] gridboard_core::GridError),
}
