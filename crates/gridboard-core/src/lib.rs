//! # gridboard-core
//!
//! Core data structures for the gridboard dashboard renderer.
//!
//! This crate provides the vocabulary the renderer speaks:
//! - [`CellValue`] - Cell values (numbers, strings, booleans, dates)
//! - [`GridPos`] and [`GridRange`] - Cell positions and rectangular ranges
//! - [`Style`] and [`StylePatch`] - Cell formatting and partial overlays
//! - [`GridSurface`] - The trait renderers write through
//! - [`SheetGrid`] - The in-memory surface implementation
//!
//! ## Example
//!
//! ```rust
//! use gridboard_core::{CellValue, GridSurface, SheetGrid};
//!
//! let mut grid = SheetGrid::new("Dashboard");
//!
//! grid.set_values(0, 0, &[
//!     vec!["Region".into(), "Revenue".into()],
//!     vec!["North".into(), 1250.0.into()],
//! ]).unwrap();
//!
//! assert_eq!(grid.get_value_at(1, 1), CellValue::Number(1250.0));
//! ```

pub mod error;
pub mod grid;
pub mod range;
pub mod style;
pub mod surface;
pub mod value;

// Re-exports for convenience
pub use error::{GridError, Result};
pub use grid::{Cell, SheetGrid};
pub use range::{GridPos, GridRange};
pub use surface::GridSurface;
pub use value::CellValue;

// Re-export all style types for convenience
pub use style::{
    Alignment, BorderEdge, BorderLineStyle, BorderStyle, Color, FillStyle, FontStyle,
    HorizontalAlignment, NumberFormat, RangeBorder, Style, StylePatch, StylePool,
    VerticalAlignment,
};

/// Maximum number of rows in a grid
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a grid
pub const MAX_COLS: u16 = 16_384;
