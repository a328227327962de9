//! In-memory grid

use std::collections::{BTreeMap, HashMap};

use crate::error::{GridError, Result};
use crate::range::{GridPos, GridRange};
use crate::style::{BorderEdge, Style, StylePatch, StylePool};
use crate::value::CellValue;
use crate::{MAX_COLS, MAX_ROWS};

/// Complete data for a single cell
#[derive(Debug, Clone)]
pub struct Cell {
    /// The cell's value
    pub value: CellValue,
    /// Index into the style pool (0 = default style)
    pub style_index: u32,
}

impl Cell {
    /// Create a new cell with a value and default style
    pub fn new(value: CellValue) -> Self {
        Self {
            value,
            style_index: 0,
        }
    }

    /// Check if this cell is effectively empty (no value and default style)
    pub fn is_empty(&self) -> bool {
        self.value.is_empty() && self.style_index == 0
    }
}

/// An in-memory sheet of cells
///
/// Storage is sparse: only non-empty cells are kept, in a row-major
/// `BTreeMap` so iteration follows reading order. Styles are deduplicated
/// through a [`StylePool`] and referenced by index.
///
/// # Example
///
/// ```rust
/// use gridboard_core::{SheetGrid, CellValue};
///
/// let mut grid = SheetGrid::new("Dashboard");
/// grid.set_value_at(0, 0, "Revenue").unwrap();
/// grid.set_value_at(0, 1, 1250.0).unwrap();
///
/// assert_eq!(grid.get_value_at(0, 1), CellValue::Number(1250.0));
/// assert_eq!(grid.get_value_at(5, 5), CellValue::Empty);
/// ```
#[derive(Debug)]
pub struct SheetGrid {
    /// Sheet name
    name: String,
    /// Row index → column map
    rows: BTreeMap<u32, BTreeMap<u16, Cell>>,
    /// Deduplicated styles
    styles: StylePool,
    /// Merged regions
    merged: Vec<GridRange>,
    /// Custom column widths (in characters)
    column_widths: BTreeMap<u16, f64>,
    /// Default column width in characters
    default_column_width: f64,
    /// Cell notes (keyed by (row, col))
    notes: HashMap<(u32, u16), String>,
}

impl SheetGrid {
    /// Create a new empty grid with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: BTreeMap::new(),
            styles: StylePool::new(),
            merged: Vec::new(),
            column_widths: BTreeMap::new(),
            default_column_width: 8.43,
            notes: HashMap::new(),
        }
    }

    /// Get the grid name
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Cell Access ===

    /// Get a cell by row and column indices
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&Cell> {
        self.rows.get(&row).and_then(|r| r.get(&col))
    }

    /// Get a cell value by indices (empty if unset)
    pub fn get_value_at(&self, row: u32, col: u16) -> CellValue {
        self.cell_at(row, col)
            .map(|c| c.value.clone())
            .unwrap_or(CellValue::Empty)
    }

    /// Set a cell value by row and column indices, preserving any style
    pub fn set_value_at<V: Into<CellValue>>(&mut self, row: u32, col: u16, value: V) -> Result<()> {
        self.validate_position(row, col)?;
        let value = value.into();

        if let Some(cell) = self.rows.get_mut(&row).and_then(|r| r.get_mut(&col)) {
            cell.value = value;
            if cell.is_empty() {
                self.remove_cell(row, col);
            }
        } else if !value.is_empty() {
            self.rows.entry(row).or_default().insert(col, Cell::new(value));
        }
        Ok(())
    }

    /// Get a cell's style index (0 for unset cells)
    pub fn style_index_at(&self, row: u32, col: u16) -> u32 {
        self.cell_at(row, col).map(|c| c.style_index).unwrap_or(0)
    }

    /// Get the non-default style applied to a cell, if any
    pub fn style_at(&self, row: u32, col: u16) -> Option<&Style> {
        let idx = self.style_index_at(row, col);
        if idx == 0 {
            None
        } else {
            self.styles.get(idx)
        }
    }

    /// Replace a cell's style wholesale
    pub fn set_style_at(&mut self, row: u32, col: u16, style: &Style) -> Result<()> {
        self.validate_position(row, col)?;
        let index = self.styles.get_or_insert(style.clone());
        self.set_style_index(row, col, index);
        Ok(())
    }

    /// Overlay a patch onto a cell's current style
    pub fn patch_style_at(&mut self, row: u32, col: u16, patch: &StylePatch) -> Result<()> {
        self.validate_position(row, col)?;
        let mut style = self
            .style_at(row, col)
            .cloned()
            .unwrap_or_default();
        patch.apply_to(&mut style);
        let index = self.styles.get_or_insert(style);
        self.set_style_index(row, col, index);
        Ok(())
    }

    /// Overwrite individual border edges on a cell, leaving `None` edges alone
    pub fn set_border_edges_at(
        &mut self,
        row: u32,
        col: u16,
        top: Option<&BorderEdge>,
        bottom: Option<&BorderEdge>,
        left: Option<&BorderEdge>,
        right: Option<&BorderEdge>,
    ) -> Result<()> {
        self.validate_position(row, col)?;
        let mut style = self
            .style_at(row, col)
            .cloned()
            .unwrap_or_default();
        if let Some(edge) = top {
            style.border.top = Some(edge.clone());
        }
        if let Some(edge) = bottom {
            style.border.bottom = Some(edge.clone());
        }
        if let Some(edge) = left {
            style.border.left = Some(edge.clone());
        }
        if let Some(edge) = right {
            style.border.right = Some(edge.clone());
        }
        let index = self.styles.get_or_insert(style);
        self.set_style_index(row, col, index);
        Ok(())
    }

    // === Region Operations ===

    /// Get the bounds of all non-empty cells
    pub fn used_bounds(&self) -> Option<GridRange> {
        if self.rows.is_empty() {
            return None;
        }

        let min_row = *self.rows.keys().next()?;
        let max_row = *self.rows.keys().next_back()?;

        let mut min_col = u16::MAX;
        let mut max_col = 0u16;

        for row_data in self.rows.values() {
            if let Some(&col) = row_data.keys().next() {
                min_col = min_col.min(col);
            }
            if let Some(&col) = row_data.keys().next_back() {
                max_col = max_col.max(col);
            }
        }

        Some(GridRange::from_indices(min_row, min_col, max_row, max_col))
    }

    /// Remove all cells, notes, and merges in a region
    pub fn clear_region(&mut self, region: &GridRange) {
        for pos in region.cells() {
            self.remove_cell(pos.row, pos.col);
            self.notes.remove(&(pos.row, pos.col));
        }
        self.merged.retain(|m| !m.overlaps(region));
    }

    // === Merged Regions ===

    /// Get merged regions
    pub fn merged_regions(&self) -> &[GridRange] {
        &self.merged
    }

    /// Merge a region of cells
    ///
    /// Fails if the region overlaps an existing merged region.
    pub fn merge_region(&mut self, region: &GridRange) -> Result<()> {
        self.validate_position(region.end.row, region.end.col)?;
        for existing in &self.merged {
            if region.overlaps(existing) {
                return Err(GridError::MergeConflict(region.to_string()));
            }
        }
        self.merged.push(*region);
        Ok(())
    }

    /// Check if a cell is covered by a merge but is not its anchor
    pub fn is_merge_shadow(&self, row: u32, col: u16) -> bool {
        let pos = GridPos::new(row, col);
        self.merged
            .iter()
            .any(|m| m.contains(&pos) && m.start != pos)
    }

    // === Column Widths ===

    /// Get a column's width in characters
    pub fn column_width(&self, col: u16) -> f64 {
        self.column_widths
            .get(&col)
            .copied()
            .unwrap_or(self.default_column_width)
    }

    /// Set a column's width in characters
    pub fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    /// Widest display string in a column, in characters
    pub fn content_width(&self, col: u16) -> usize {
        self.rows
            .values()
            .filter_map(|r| r.get(&col))
            .map(|c| c.value.to_string().chars().count())
            .max()
            .unwrap_or(0)
    }

    // === Notes ===

    /// Attach a note to a cell
    pub fn set_note_at<S: Into<String>>(&mut self, row: u32, col: u16, text: S) -> Result<()> {
        self.validate_position(row, col)?;
        self.notes.insert((row, col), text.into());
        Ok(())
    }

    /// Get a cell's note, if any
    pub fn note_at(&self, row: u32, col: u16) -> Option<&str> {
        self.notes.get(&(row, col)).map(|s| s.as_str())
    }

    /// Get the number of non-empty cells
    pub fn cell_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    // === Internals ===

    fn validate_position(&self, row: u32, col: u16) -> Result<()> {
        if row >= MAX_ROWS {
            return Err(GridError::RowOutOfBounds(row, MAX_ROWS - 1));
        }
        if col >= MAX_COLS {
            return Err(GridError::ColumnOutOfBounds(col, MAX_COLS - 1));
        }
        Ok(())
    }

    fn set_style_index(&mut self, row: u32, col: u16, index: u32) {
        if let Some(cell) = self.rows.get_mut(&row).and_then(|r| r.get_mut(&col)) {
            cell.style_index = index;
            if cell.is_empty() {
                self.remove_cell(row, col);
            }
        } else if index != 0 {
            self.rows.entry(row).or_default().insert(
                col,
                Cell {
                    value: CellValue::Empty,
                    style_index: index,
                },
            );
        }
    }

    fn remove_cell(&mut self, row: u32, col: u16) {
        if let Some(row_map) = self.rows.get_mut(&row) {
            row_map.remove(&col);
            if row_map.is_empty() {
                self.rows.remove(&row);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Color, HorizontalAlignment};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_sparse_storage() {
        let mut grid = SheetGrid::new("Test");
        assert_eq!(grid.cell_count(), 0);

        grid.set_value_at(5, 3, 42.0).unwrap();
        grid.set_value_at(100, 0, "far away").unwrap();
        assert_eq!(grid.cell_count(), 2);

        // Writing Empty over an unstyled cell removes it
        grid.set_value_at(5, 3, CellValue::Empty).unwrap();
        assert_eq!(grid.cell_count(), 1);
    }

    #[test]
    fn test_used_bounds() {
        let mut grid = SheetGrid::new("Test");
        assert_eq!(grid.used_bounds(), None);

        grid.set_value_at(2, 1, "a").unwrap();
        grid.set_value_at(7, 4, "b").unwrap();

        let bounds = grid.used_bounds().unwrap();
        assert_eq!(bounds, GridRange::from_indices(2, 1, 7, 4));
    }

    #[test]
    fn test_patch_style_layers() {
        let mut grid = SheetGrid::new("Test");
        grid.set_value_at(0, 0, "x").unwrap();

        grid.patch_style_at(0, 0, &StylePatch::new().bold(true)).unwrap();
        grid.patch_style_at(0, 0, &StylePatch::new().fill_color(Color::LIGHT_GRAY))
            .unwrap();
        grid.patch_style_at(
            0,
            0,
            &StylePatch::new().horizontal(HorizontalAlignment::Right),
        )
        .unwrap();

        let style = grid.style_at(0, 0).expect("style should be set");
        assert!(style.font.bold, "first patch must survive later patches");
        assert_eq!(style.fill.color(), Some(Color::LIGHT_GRAY));
        assert_eq!(style.alignment.horizontal, HorizontalAlignment::Right);
    }

    #[test]
    fn test_style_on_empty_cell_persists() {
        let mut grid = SheetGrid::new("Test");
        grid.patch_style_at(1, 1, &StylePatch::new().bold(true)).unwrap();

        assert_eq!(grid.get_value_at(1, 1), CellValue::Empty);
        assert!(grid.style_at(1, 1).is_some());
    }

    #[test]
    fn test_merge_conflict() {
        let mut grid = SheetGrid::new("Test");
        grid.merge_region(&GridRange::from_indices(0, 0, 2, 0)).unwrap();

        let overlapping = GridRange::from_indices(2, 0, 4, 0);
        assert!(grid.merge_region(&overlapping).is_err());

        let disjoint = GridRange::from_indices(3, 0, 5, 0);
        assert!(grid.merge_region(&disjoint).is_ok());
    }

    #[test]
    fn test_merge_shadow() {
        let mut grid = SheetGrid::new("Test");
        grid.merge_region(&GridRange::from_indices(1, 1, 3, 1)).unwrap();

        assert!(!grid.is_merge_shadow(1, 1)); // anchor
        assert!(grid.is_merge_shadow(2, 1));
        assert!(grid.is_merge_shadow(3, 1));
        assert!(!grid.is_merge_shadow(4, 1)); // outside
    }

    #[test]
    fn test_clear_region() {
        let mut grid = SheetGrid::new("Test");
        grid.set_value_at(0, 0, "keep").unwrap();
        grid.set_value_at(2, 2, "drop").unwrap();
        grid.set_note_at(2, 2, "note").unwrap();
        grid.merge_region(&GridRange::from_indices(2, 2, 3, 3)).unwrap();

        grid.clear_region(&GridRange::from_indices(1, 1, 5, 5));

        assert_eq!(grid.get_value_at(0, 0), CellValue::string("keep"));
        assert_eq!(grid.get_value_at(2, 2), CellValue::Empty);
        assert_eq!(grid.note_at(2, 2), None);
        assert!(grid.merged_regions().is_empty());
    }

    #[test]
    fn test_content_width() {
        let mut grid = SheetGrid::new("Test");
        grid.set_value_at(0, 0, "ab").unwrap();
        grid.set_value_at(1, 0, "abcdef").unwrap();
        grid.set_value_at(2, 0, 3.5).unwrap();

        assert_eq!(grid.content_width(0), 6);
        assert_eq!(grid.content_width(9), 0);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = SheetGrid::new("Test");
        assert!(grid.set_value_at(crate::MAX_ROWS, 0, 1.0).is_err());
        assert!(grid.set_value_at(0, crate::MAX_COLS, 1.0).is_err());
    }
}
