//! Row contexts and materialization

use crate::column::Column;
use crate::error::{RenderError, Result};
use gridboard_core::{CellValue, GridRange, GridSurface, StylePatch, VerticalAlignment};
use std::collections::HashMap;

/// A row object the renderer can materialize
///
/// The renderer sees rows only through column accessors and this trait.
/// `group_key` identifies the visual band a row belongs to when span
/// grouping is in play; ungrouped datasets keep the default.
pub trait RowContext {
    /// Key that selects this row's span from a [`RowSpans`] map
    fn group_key(&self) -> Option<&str> {
        None
    }
}

/// Physical row spans keyed by group key
///
/// A row whose group key maps to a span greater than 1 is rendered as a
/// vertically merged band of that many grid rows. Rows whose key is absent
/// from the map take the default span.
///
/// # Example
///
/// ```rust
/// use gridboard_render::RowSpans;
///
/// let spans = RowSpans::new().span("Q1", 3).span("Q2", 3);
/// assert_eq!(spans.span_of(Some("Q1")), 3);
/// assert_eq!(spans.span_of(Some("March")), 1);
/// assert_eq!(spans.span_of(None), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RowSpans {
    spans: HashMap<String, u32>,
    default_span: u32,
}

impl RowSpans {
    /// Create an empty span map with a default span of 1
    pub fn new() -> Self {
        Self {
            spans: HashMap::new(),
            default_span: 1,
        }
    }

    /// Map a group key to a span
    pub fn span<K: Into<String>>(mut self, key: K, rows: u32) -> Self {
        self.spans.insert(key.into(), rows);
        self
    }

    /// Set the span used for rows with no mapped key
    pub fn default_span(mut self, rows: u32) -> Self {
        self.default_span = rows;
        self
    }

    /// Look up the span for a group key
    ///
    /// Unknown or absent keys fall back to the default. Spans below 1 are
    /// treated as 1.
    pub fn span_of(&self, key: Option<&str>) -> u32 {
        key.and_then(|k| self.spans.get(k).copied())
            .unwrap_or(self.default_span)
            .max(1)
    }

    /// Check if a key is present in the map
    pub fn is_mapped(&self, key: &str) -> bool {
        self.spans.contains_key(key)
    }

    /// Check if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

impl Default for RowSpans {
    fn default() -> Self {
        Self::new()
    }
}

/// Write materialized rows into the grid, applying span merges
///
/// Each row is written at the cursor; rows with a span greater than 1 merge
/// every column's cell vertically and center the value, then the cursor
/// advances by the span. Returns the last occupied row, or `None` when
/// there were no rows.
///
/// Two adjacent rows sharing a mapped group key violate the span partition:
/// each mapped key must tile exactly one materialized row.
pub(crate) fn write_rows<R, S>(
    grid: &mut S,
    start_row: u32,
    start_col: u16,
    columns: &[Column<R>],
    rows: &[R],
    spans: &RowSpans,
) -> Result<Option<u32>>
where
    R: RowContext,
    S: GridSurface + ?Sized,
{
    let mut cursor = start_row;
    let mut prev_key: Option<&str> = None;

    for (i, row) in rows.iter().enumerate() {
        let key = row.group_key();
        if i > 0 {
            if let (Some(prev), Some(curr)) = (prev_key, key) {
                if prev == curr && spans.is_mapped(curr) {
                    return Err(RenderError::SpanPartition(curr.to_string()));
                }
            }
        }

        let span = spans.span_of(key);
        let values: Vec<CellValue> = columns.iter().map(|c| c.value_of(row)).collect();
        grid.set_values(cursor, start_col, &[values])?;

        if span > 1 {
            log::debug!(
                "spanning group '{}' across {} rows at row {}",
                key.unwrap_or(""),
                span,
                cursor
            );
            for c in 0..columns.len() {
                let col = start_col + c as u16;
                let block = GridRange::from_indices(cursor, col, cursor + span - 1, col);
                grid.merge(&block)?;
                grid.patch_style(
                    &block,
                    &StylePatch::new().vertical(VerticalAlignment::Center),
                )?;
            }
        }

        prev_key = key;
        cursor += span;
    }

    Ok(if cursor > start_row {
        Some(cursor - 1)
    } else {
        None
    })
}
