//! The grid surface abstraction

use crate::error::{GridError, Result};
use crate::grid::SheetGrid;
use crate::range::GridRange;
use crate::style::{RangeBorder, StylePatch};
use crate::value::CellValue;
use crate::MAX_COLS;

/// A writable grid of cells
///
/// This is the seam between table rendering and whatever actually holds the
/// cells: the in-memory [`SheetGrid`], or an adapter over a spreadsheet
/// backend. Renderers drive surfaces exclusively through this trait.
///
/// Coordinates are 0-based, rows `u32` and columns `u16`. All mutation goes
/// through `&mut self`, so a surface has at most one active writer.
pub trait GridSurface {
    /// Write a matrix of values with its top-left corner at (row, col)
    ///
    /// `values` is a slice of rows. Empty values overwrite (clear) existing
    /// cells rather than skipping them.
    fn set_values(&mut self, row: u32, col: u16, values: &[Vec<CellValue>]) -> Result<()>;

    /// Read the values of a rectangular range as a row-major matrix
    ///
    /// Unset cells read as [`CellValue::Empty`].
    fn get_values(&self, range: &GridRange) -> Vec<Vec<CellValue>>;

    /// Merge a range into a single visual cell
    fn merge(&mut self, range: &GridRange) -> Result<()>;

    /// Overlay a style patch onto every cell in a range
    fn patch_style(&mut self, range: &GridRange, patch: &StylePatch) -> Result<()>;

    /// Apply a border specification to a range
    fn set_border(&mut self, range: &GridRange, border: &RangeBorder) -> Result<()>;

    /// Attach a note to a cell
    fn set_note(&mut self, row: u32, col: u16, text: &str) -> Result<()>;

    /// Set a column's width in characters
    fn set_column_width(&mut self, col: u16, width: f64) -> Result<()>;

    /// Size a column to its content plus padding
    ///
    /// Columns with no content keep their current width.
    fn auto_fit_column(&mut self, col: u16, padding: f64) -> Result<()>;
}

impl GridSurface for SheetGrid {
    fn set_values(&mut self, row: u32, col: u16, values: &[Vec<CellValue>]) -> Result<()> {
        for (r, row_values) in values.iter().enumerate() {
            for (c, value) in row_values.iter().enumerate() {
                self.set_value_at(row + r as u32, col + c as u16, value.clone())?;
            }
        }
        Ok(())
    }

    fn get_values(&self, range: &GridRange) -> Vec<Vec<CellValue>> {
        let mut rows = Vec::with_capacity(range.row_count() as usize);
        for r in range.start.row..=range.end.row {
            let mut row = Vec::with_capacity(range.col_count() as usize);
            for c in range.start.col..=range.end.col {
                row.push(self.get_value_at(r, c));
            }
            rows.push(row);
        }
        rows
    }

    fn merge(&mut self, range: &GridRange) -> Result<()> {
        self.merge_region(range)
    }

    fn patch_style(&mut self, range: &GridRange, patch: &StylePatch) -> Result<()> {
        for pos in range.cells() {
            self.patch_style_at(pos.row, pos.col, patch)?;
        }
        Ok(())
    }

    fn set_border(&mut self, range: &GridRange, border: &RangeBorder) -> Result<()> {
        for pos in range.cells() {
            let top = if pos.row == range.start.row {
                border.top.as_ref()
            } else {
                border.inner_horizontal.as_ref()
            };
            let bottom = if pos.row == range.end.row {
                border.bottom.as_ref()
            } else {
                border.inner_horizontal.as_ref()
            };
            let left = if pos.col == range.start.col {
                border.left.as_ref()
            } else {
                border.inner_vertical.as_ref()
            };
            let right = if pos.col == range.end.col {
                border.right.as_ref()
            } else {
                border.inner_vertical.as_ref()
            };
            self.set_border_edges_at(pos.row, pos.col, top, bottom, left, right)?;
        }
        Ok(())
    }

    fn set_note(&mut self, row: u32, col: u16, text: &str) -> Result<()> {
        self.set_note_at(row, col, text)
    }

    fn set_column_width(&mut self, col: u16, width: f64) -> Result<()> {
        if col >= MAX_COLS {
            return Err(GridError::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        SheetGrid::set_column_width(self, col, width);
        Ok(())
    }

    fn auto_fit_column(&mut self, col: u16, padding: f64) -> Result<()> {
        if col >= MAX_COLS {
            return Err(GridError::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        let content = self.content_width(col);
        if content > 0 {
            SheetGrid::set_column_width(self, col, content as f64 + padding);
        }
        Ok(())
    }
}
