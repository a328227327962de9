//! Declarative dashboard tables for grid surfaces
//!
//! This crate turns a column list and a slice of row objects into a
//! positioned, styled table on any [`GridSurface`]: title, header and
//! description rows, span-grouped data rows, a trailing summary row, and
//! a decoration pass covering fills, number formats, sign coloring,
//! borders, alignment, and column widths.
//!
//! The renderer is stateless. Each [`Table::render`] call lays the table
//! out fresh from the given origin and returns [`TableBounds`], which
//! callers use to place further output beside or below it.
//!
//! # Example
//!
//! ```rust
//! use gridboard_core::{GridPos, SheetGrid};
//! use gridboard_render::{Column, RowContext, SummaryRule, Table, ValueFormat};
//!
//! struct Expense {
//!     label: String,
//!     amount: f64,
//! }
//!
//! impl RowContext for Expense {}
//!
//! let table = Table::new()
//!     .title("Expenses")
//!     .column(Column::new("label", "Label", |e: &Expense| e.label.clone().into()))
//!     .column(
//!         Column::new("amount", "Amount", |e: &Expense| e.amount.into())
//!             .format(ValueFormat::Currency),
//!     )
//!     .summary("amount", SummaryRule::sum());
//!
//! let rows = vec![
//!     Expense { label: "travel".into(), amount: 820.0 },
//!     Expense { label: "meals".into(), amount: 132.4 },
//! ];
//!
//! let mut grid = SheetGrid::new("Report");
//! let bounds = table.render(&mut grid, GridPos::new(0, 0), &rows).unwrap();
//! let next_origin = bounds.below(1);
//! # let _ = next_origin;
//! ```
//!
//! [`GridSurface`]: gridboard_core::GridSurface

pub mod column;
pub mod config;
mod decor;
pub mod error;
pub mod format;
pub mod layout;
pub mod rows;
pub mod summary;
pub mod table;

pub use column::Column;
pub use config::{Palette, RenderConfig};
pub use error::{RenderError, Result};
pub use format::{format_value, resolve_decimals, ValueFormat};
pub use layout::TableBounds;
pub use rows::{RowContext, RowSpans};
pub use summary::{SummaryOp, SummaryRule};
pub use table::{Table, Title};
