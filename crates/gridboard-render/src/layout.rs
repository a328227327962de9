//! Table bounds and region composition
//!
//! A render call returns [`TableBounds`] describing exactly which rows and
//! columns the table occupied. Callers use the bounds to place neighboring
//! output (a second table, a chart anchor) without overlapping the first.

use gridboard_core::{GridPos, GridRange};

/// Row reservations computed before any cell is written
///
/// Stages consume rows in a fixed order: title, header, description, data.
/// A description row exists only when a header row does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LayoutPlan {
    pub title_row: Option<u32>,
    pub header_row: Option<u32>,
    pub description_row: Option<u32>,
    pub data_start_row: u32,
}

impl LayoutPlan {
    pub(crate) fn plan(
        origin_row: u32,
        has_title: bool,
        has_headers: bool,
        has_description: bool,
    ) -> Self {
        let mut next = origin_row;
        let mut title_row = None;
        if has_title {
            title_row = Some(next);
            next += 1;
        }
        let mut header_row = None;
        if has_headers {
            header_row = Some(next);
            next += 1;
        }
        let mut description_row = None;
        if has_description && has_headers {
            description_row = Some(next);
            next += 1;
        }
        Self {
            title_row,
            header_row,
            description_row,
            data_start_row: next,
        }
    }
}

/// The rectangular region a rendered table occupies
///
/// Bounds are immutable once returned. `data_end_row` is `None` when the
/// table had zero data rows; `summary_row` is `None` when no summary was
/// requested. The overall last row is exposed through [`end_row`], which
/// accounts for whichever trailing rows are present.
///
/// [`end_row`]: TableBounds::end_row
///
/// # Example
///
/// ```rust
/// use gridboard_core::GridPos;
/// use gridboard_render::TableBounds;
///
/// let bounds = TableBounds {
///     origin: GridPos::new(0, 0),
///     end_col: 2,
///     title_row: None,
///     header_row: Some(0),
///     description_row: None,
///     data_start_row: 1,
///     data_end_row: Some(4),
///     summary_row: Some(5),
/// };
/// assert_eq!(bounds.end_row(), 5);
/// assert_eq!(bounds.below(1), GridPos::new(7, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableBounds {
    /// Top-left cell of the table
    pub origin: GridPos,
    /// Last column occupied by the table
    pub end_col: u16,
    /// Row holding the title, when one was rendered
    pub title_row: Option<u32>,
    /// Row holding the column labels, when headers were rendered
    pub header_row: Option<u32>,
    /// Row holding per-column descriptions, when one was rendered
    pub description_row: Option<u32>,
    /// First row of the data region
    pub data_start_row: u32,
    /// Last data row, or `None` when the table had zero data rows
    pub data_end_row: Option<u32>,
    /// Row holding the summary, when one was rendered
    pub summary_row: Option<u32>,
}

impl TableBounds {
    /// First row of the table
    pub fn start_row(&self) -> u32 {
        self.origin.row
    }

    /// First column of the table
    pub fn start_col(&self) -> u16 {
        self.origin.col
    }

    /// Number of columns the table occupies
    pub fn column_count(&self) -> u16 {
        self.end_col - self.origin.col + 1
    }

    /// Number of physical data rows
    pub fn data_row_count(&self) -> u32 {
        self.data_end_row
            .map_or(0, |end| end - self.data_start_row + 1)
    }

    /// Last row occupied by the table
    ///
    /// The summary row when present, otherwise the last data row, falling
    /// back through description, header, and title rows for tables that
    /// rendered nothing below them.
    pub fn end_row(&self) -> u32 {
        self.summary_row
            .or(self.data_end_row)
            .or(self.description_row)
            .or(self.header_row)
            .or(self.title_row)
            .unwrap_or(self.origin.row)
    }

    /// The full region the table occupies
    pub fn region(&self) -> GridRange {
        GridRange::from_indices(
            self.origin.row,
            self.origin.col,
            self.end_row(),
            self.end_col,
        )
    }

    /// The data region, when the table has data rows
    pub fn data_region(&self) -> Option<GridRange> {
        self.data_end_row.map(|end| {
            GridRange::from_indices(self.data_start_row, self.origin.col, end, self.end_col)
        })
    }

    /// Origin for a table placed to the right, after `gap` blank columns
    pub fn beside(&self, gap: u16) -> GridPos {
        GridPos::new(self.origin.row, self.end_col + 1 + gap)
    }

    /// Origin for a table placed underneath, after `gap` blank rows
    pub fn below(&self, gap: u32) -> GridPos {
        GridPos::new(self.end_row() + 1 + gap, self.origin.col)
    }
}
