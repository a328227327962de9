//! Grid positions and rectangular ranges

use crate::error::{GridError, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// A single cell position (e.g., "A1")
///
/// Positions combine column letters (A-XFD) and row numbers, displayed
/// 1-based but stored 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    /// Row index (0-based internally, 1-based in display)
    pub row: u32,
    /// Column index (0-based, A=0, B=1, ...)
    pub col: u16,
}

impl GridPos {
    /// Create a new position
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a position from A1-style notation
    ///
    /// # Examples
    /// ```
    /// use gridboard_core::GridPos;
    ///
    /// let pos = GridPos::parse("A1").unwrap();
    /// assert_eq!(pos.row, 0);
    /// assert_eq!(pos.col, 0);
    ///
    /// let pos = GridPos::parse("C10").unwrap();
    /// assert_eq!(pos.row, 9);
    /// assert_eq!(pos.col, 2);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(GridError::InvalidPosition("empty position".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == 0 {
            return Err(GridError::InvalidPosition(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = Self::letters_to_column(&s[..pos])?;

        let row_str = &s[pos..];
        if row_str.is_empty() {
            return Err(GridError::InvalidPosition(format!("no row number in '{}'", s)));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| GridError::InvalidPosition(format!("invalid row number in '{}'", s)))?;

        // Rows display 1-based, stored 0-based
        if row == 0 {
            return Err(GridError::InvalidPosition(format!(
                "row number must be >= 1 in '{}'",
                s
            )));
        }

        let row = row - 1;

        if row >= MAX_ROWS {
            return Err(GridError::RowOutOfBounds(row, MAX_ROWS - 1));
        }

        Ok(Self { row, col })
    }

    /// Convert column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
    pub fn column_to_letters(col: u16) -> String {
        let mut result = String::new();
        let mut n = col as u32 + 1; // 1-based for calculation

        while n > 0 {
            n -= 1;
            let c = ((n % 26) as u8 + b'A') as char;
            result.insert(0, c);
            n /= 26;
        }

        result
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    pub fn letters_to_column(letters: &str) -> Result<u16> {
        if letters.is_empty() {
            return Err(GridError::InvalidPosition("empty column letters".into()));
        }

        let mut col: u32 = 0;
        for c in letters.chars() {
            if !c.is_ascii_alphabetic() {
                return Err(GridError::InvalidPosition(format!(
                    "invalid column letter '{}'",
                    c
                )));
            }
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        }

        let col = col - 1; // Convert to 0-based

        if col >= MAX_COLS as u32 {
            return Err(GridError::ColumnOutOfBounds(col as u16, MAX_COLS - 1));
        }

        Ok(col as u16)
    }

    /// Format as an A1-style string
    pub fn to_a1_string(&self) -> String {
        format!("{}{}", Self::column_to_letters(self.col), self.row + 1)
    }

    /// Create a range from this position to another
    pub fn to(&self, other: GridPos) -> GridRange {
        GridRange::new(*self, other)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for GridPos {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells (e.g., "A1:B10")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridRange {
    /// Start position (top-left)
    pub start: GridPos,
    /// End position (bottom-right)
    pub end: GridPos,
}

impl GridRange {
    /// Create a new range, normalized so start is top-left
    pub fn new(start: GridPos, end: GridPos) -> Self {
        let (start_row, end_row) = if start.row <= end.row {
            (start.row, end.row)
        } else {
            (end.row, start.row)
        };

        let (start_col, end_col) = if start.col <= end.col {
            (start.col, end.col)
        } else {
            (end.col, start.col)
        };

        Self {
            start: GridPos::new(start_row, start_col),
            end: GridPos::new(end_row, end_col),
        }
    }

    /// Create a range from row/column indices
    pub fn from_indices(start_row: u32, start_col: u16, end_row: u32, end_col: u16) -> Self {
        Self::new(
            GridPos::new(start_row, start_col),
            GridPos::new(end_row, end_col),
        )
    }

    /// Create a single-cell range
    pub fn single(pos: GridPos) -> Self {
        Self { start: pos, end: pos }
    }

    /// Parse a range from A1:B10 notation
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(colon_pos) = s.find(':') {
            let start = GridPos::parse(&s[..colon_pos])?;
            let end = GridPos::parse(&s[colon_pos + 1..])?;
            Ok(Self::new(start, end))
        } else {
            let pos = GridPos::parse(s)?;
            Ok(Self::single(pos))
        }
    }

    /// Check if a position is within this range
    pub fn contains(&self, pos: &GridPos) -> bool {
        pos.row >= self.start.row
            && pos.row <= self.end.row
            && pos.col >= self.start.col
            && pos.col <= self.end.col
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> u16 {
        self.end.col - self.start.col + 1
    }

    /// Get the total number of cells in the range
    pub fn cell_count(&self) -> u64 {
        self.row_count() as u64 * self.col_count() as u64
    }

    /// Check if this range overlaps with another
    pub fn overlaps(&self, other: &GridRange) -> bool {
        self.start.row <= other.end.row
            && self.end.row >= other.start.row
            && self.start.col <= other.end.col
            && self.end.col >= other.start.col
    }

    /// Iterate over all positions in the range (row by row)
    pub fn cells(&self) -> GridRangeIterator {
        GridRangeIterator {
            range: *self,
            current_row: self.start.row,
            current_col: self.start.col,
        }
    }

    /// Format as an A1:B10 string
    pub fn to_a1_string(&self) -> String {
        if self.start == self.end {
            self.start.to_a1_string()
        } else {
            format!("{}:{}", self.start.to_a1_string(), self.end.to_a1_string())
        }
    }
}

impl fmt::Display for GridRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_a1_string())
    }
}

impl FromStr for GridRange {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Iterator over positions in a range
pub struct GridRangeIterator {
    range: GridRange,
    current_row: u32,
    current_col: u16,
}

impl Iterator for GridRangeIterator {
    type Item = GridPos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current_row > self.range.end.row {
            return None;
        }

        let pos = GridPos::new(self.current_row, self.current_col);

        self.current_col += 1;
        if self.current_col > self.range.end.col {
            self.current_col = self.range.start.col;
            self.current_row += 1;
        }

        Some(pos)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range.cell_count() as usize;
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(GridPos::column_to_letters(0), "A");
        assert_eq!(GridPos::column_to_letters(1), "B");
        assert_eq!(GridPos::column_to_letters(25), "Z");
        assert_eq!(GridPos::column_to_letters(26), "AA");
        assert_eq!(GridPos::column_to_letters(27), "AB");
        assert_eq!(GridPos::column_to_letters(701), "ZZ");
        assert_eq!(GridPos::column_to_letters(702), "AAA");
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(GridPos::letters_to_column("A").unwrap(), 0);
        assert_eq!(GridPos::letters_to_column("B").unwrap(), 1);
        assert_eq!(GridPos::letters_to_column("Z").unwrap(), 25);
        assert_eq!(GridPos::letters_to_column("AA").unwrap(), 26);
        assert_eq!(GridPos::letters_to_column("ZZ").unwrap(), 701);

        // Case insensitive
        assert_eq!(GridPos::letters_to_column("a").unwrap(), 0);
        assert_eq!(GridPos::letters_to_column("aa").unwrap(), 26);
    }

    #[test]
    fn test_grid_pos_parse() {
        let pos = GridPos::parse("A1").unwrap();
        assert_eq!(pos.row, 0);
        assert_eq!(pos.col, 0);

        let pos = GridPos::parse("B2").unwrap();
        assert_eq!(pos.row, 1);
        assert_eq!(pos.col, 1);

        let pos = GridPos::parse("AA100").unwrap();
        assert_eq!(pos.row, 99);
        assert_eq!(pos.col, 26);
    }

    #[test]
    fn test_grid_pos_parse_errors() {
        assert!(GridPos::parse("").is_err());
        assert!(GridPos::parse("A").is_err());
        assert!(GridPos::parse("1").is_err());
        assert!(GridPos::parse("A0").is_err()); // Row 0 is invalid
        assert!(GridPos::parse("XFE1").is_err()); // Column too large
    }

    #[test]
    fn test_grid_pos_display() {
        assert_eq!(GridPos::new(0, 0).to_string(), "A1");
        assert_eq!(GridPos::new(99, 2).to_string(), "C100");
    }

    #[test]
    fn test_grid_range_parse() {
        let range = GridRange::parse("A1:B2").unwrap();
        assert_eq!(range.start, GridPos::new(0, 0));
        assert_eq!(range.end, GridPos::new(1, 1));

        // Single cell
        let range = GridRange::parse("C3").unwrap();
        assert_eq!(range.start, GridPos::new(2, 2));
        assert_eq!(range.end, GridPos::new(2, 2));

        // Reversed corners normalize
        let range = GridRange::parse("B2:A1").unwrap();
        assert_eq!(range.start, GridPos::new(0, 0));
        assert_eq!(range.end, GridPos::new(1, 1));
    }

    #[test]
    fn test_grid_range_contains_and_overlaps() {
        let range = GridRange::parse("B2:D4").unwrap();

        assert!(range.contains(&GridPos::new(1, 1))); // B2
        assert!(range.contains(&GridPos::new(3, 3))); // D4
        assert!(!range.contains(&GridPos::new(0, 0))); // A1

        let other = GridRange::parse("D4:E5").unwrap();
        assert!(range.overlaps(&other));

        let disjoint = GridRange::parse("F1:G2").unwrap();
        assert!(!range.overlaps(&disjoint));
    }

    #[test]
    fn test_grid_range_iterator() {
        let range = GridRange::parse("A1:B2").unwrap();
        let cells: Vec<_> = range.cells().collect();

        assert_eq!(cells.len(), 4);
        assert_eq!(cells[0], GridPos::new(0, 0)); // A1
        assert_eq!(cells[1], GridPos::new(0, 1)); // B1
        assert_eq!(cells[2], GridPos::new(1, 0)); // A2
        assert_eq!(cells[3], GridPos::new(1, 1)); // B2
    }
}
