//! # gridboard
//!
//! A Rust library for rendering declarative dashboard tables onto
//! spreadsheet-like grid surfaces.
//!
//! A table is described once as columns plus presentation options, then
//! rendered at any origin on any [`GridSurface`]. The renderer lays out
//! title, header, description, data, and summary rows, merges span
//! groups, and decorates the region with fills, number formats, sign
//! coloring, borders, alignment, and column widths. Each render returns
//! [`TableBounds`] for composing further output beside or below.
//!
//! ## Features
//!
//! - Declarative column model with typed value formats
//! - Span-grouped rows with vertical merging
//! - Summary rows with sum and average aggregates
//! - Zebra banding, sign-based coloring, and border decoration
//! - Composition helpers for multi-table dashboards
//! - CSV dataset loading and region export - optional
//!
//! ## Example
//!
//! ```rust
//! use gridboard::prelude::*;
//!
//! struct Sale {
//!     item: String,
//!     total: f64,
//! }
//!
//! impl RowContext for Sale {}
//!
//! let table = Table::new()
//!     .title("Sales")
//!     .column(Column::new("item", "Item", |s: &Sale| s.item.clone().into()))
//!     .column(
//!         Column::new("total", "Total", |s: &Sale| s.total.into())
//!             .format(ValueFormat::Currency),
//!     )
//!     .summary("total", SummaryRule::sum());
//!
//! let rows = vec![
//!     Sale { item: "widget".into(), total: 10.5 },
//!     Sale { item: "gadget".into(), total: 5.25 },
//! ];
//!
//! let mut grid = SheetGrid::new("Dashboard");
//! let bounds = table.render(&mut grid, GridPos::new(0, 0), &rows).unwrap();
//! assert_eq!(grid.get_value_at(bounds.summary_row.unwrap(), 1).to_string(), "Σ $15.75");
//! ```

pub mod prelude;

// Re-export core types
pub use gridboard_core::{
    Alignment,
    BorderEdge,
    BorderLineStyle,
    BorderStyle,
    Cell,
    // Cell types
    CellValue,
    Color,
    FillStyle,
    FontStyle,
    // Error types
    GridError,
    // Position types
    GridPos,
    GridRange,
    // Main types
    GridSurface,
    HorizontalAlignment,
    NumberFormat,
    RangeBorder,
    SheetGrid,
    // Style types
    Style,
    StylePatch,
    StylePool,
    VerticalAlignment,
    // Constants
    MAX_COLS,
    MAX_ROWS,
};

// Re-export renderer types
pub use gridboard_render::{
    format_value, resolve_decimals, Column, Palette, RenderConfig, RenderError, Result, RowContext,
    RowSpans, SummaryOp, SummaryRule, Table, TableBounds, Title, ValueFormat,
};

// Re-export CSV types
#[cfg(feature = "csv")]
pub use gridboard_csv::{
    field, CsvError, CsvResult, Dataset, DatasetReader, LineTerminator, ReadOptions, Record,
    RegionWriter, WriteOptions,
};

/// Extension trait rendering a table straight from a loaded dataset
#[cfg(feature = "csv")]
pub trait TableDatasetExt {
    /// Render the dataset's records at `origin`
    fn render_dataset<S>(
        &self,
        grid: &mut S,
        origin: GridPos,
        dataset: &Dataset,
    ) -> Result<TableBounds>
    where
        S: GridSurface + ?Sized;
}

#[cfg(feature = "csv")]
impl TableDatasetExt for Table<Record> {
    fn render_dataset<S>(
        &self,
        grid: &mut S,
        origin: GridPos,
        dataset: &Dataset,
    ) -> Result<TableBounds>
    where
        S: GridSurface + ?Sized,
    {
        self.render(grid, origin, &dataset.records)
    }
}
