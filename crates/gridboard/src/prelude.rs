//! Prelude module - common imports for gridboard users
//!
//! ```rust
//! use gridboard::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellValue,
    // Column types
    Column,
    Color,
    // Error types
    GridError,
    // Position types
    GridPos,
    GridRange,
    // Main types
    GridSurface,
    HorizontalAlignment,
    Palette,
    RenderConfig,
    RenderError,
    Result,
    RowContext,
    RowSpans,
    SheetGrid,
    // Style types
    Style,
    StylePatch,
    SummaryOp,
    SummaryRule,
    Table,
    TableBounds,
    Title,
    ValueFormat,
    VerticalAlignment,
};

#[cfg(feature = "csv")]
pub use crate::{field, Dataset, DatasetReader, ReadOptions, Record, RegionWriter, TableDatasetExt, WriteOptions};
