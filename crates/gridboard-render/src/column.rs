//! Column definitions

use crate::error::{RenderError, Result};
use crate::format::ValueFormat;
use gridboard_core::{CellValue, HorizontalAlignment};
use std::fmt;
use std::sync::Arc;

/// A typed table column
///
/// A column pairs presentation metadata (label, format, alignment) with an
/// accessor that pulls the column's value out of a row object. Accessors
/// are pure; they never touch the grid.
///
/// # Example
///
/// ```rust
/// use gridboard_render::{Column, ValueFormat};
///
/// struct Sale { region: String, revenue: f64 }
///
/// let col = Column::new("revenue", "Revenue", |s: &Sale| s.revenue.into())
///     .format(ValueFormat::Currency)
///     .decimals(2);
///
/// let sale = Sale { region: "North".into(), revenue: 1250.0 };
/// assert_eq!(col.value_of(&sale).as_number(), Some(1250.0));
/// ```
pub struct Column<R> {
    key: String,
    label: String,
    accessor: Arc<dyn Fn(&R) -> CellValue>,
    format: ValueFormat,
    decimals: Option<u32>,
    align: Option<HorizontalAlignment>,
    description: Option<String>,
    help: Option<String>,
    width: Option<f64>,
}

impl<R> Column<R> {
    /// Create a column with a key, header label, and value accessor
    pub fn new<K, L, F>(key: K, label: L, accessor: F) -> Self
    where
        K: Into<String>,
        L: Into<String>,
        F: Fn(&R) -> CellValue + 'static,
    {
        Self {
            key: key.into(),
            label: label.into(),
            accessor: Arc::new(accessor),
            format: ValueFormat::Text,
            decimals: None,
            align: None,
            description: None,
            help: None,
            width: None,
        }
    }

    /// Set the display format
    pub fn format(mut self, format: ValueFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the decimal places (overrides the format default)
    pub fn decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }

    /// Set an explicit horizontal alignment
    pub fn align(mut self, align: HorizontalAlignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Set a short description shown under the header
    pub fn description<S: Into<String>>(mut self, text: S) -> Self {
        self.description = Some(text.into());
        self
    }

    /// Set hover help attached to the header as a note
    pub fn help<S: Into<String>>(mut self, text: S) -> Self {
        self.help = Some(text.into());
        self
    }

    /// Set an explicit column width, disabling auto-fit
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// The column key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The header label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The display format
    pub fn value_format(&self) -> ValueFormat {
        self.format
    }

    /// Declared decimal places, if any
    pub fn declared_decimals(&self) -> Option<u32> {
        self.decimals
    }

    /// Explicit alignment, if any
    pub fn declared_alignment(&self) -> Option<HorizontalAlignment> {
        self.align
    }

    /// Description text, if any
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Help text, if any
    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Explicit width, if any
    pub fn declared_width(&self) -> Option<f64> {
        self.width
    }

    /// Extract this column's value from a row
    pub fn value_of(&self, row: &R) -> CellValue {
        (self.accessor)(row)
    }

    /// The alignment applied to this column's data cells
    ///
    /// Explicit alignment wins; otherwise numeric formats align right and
    /// everything else aligns left.
    pub fn data_alignment(&self) -> HorizontalAlignment {
        self.align.unwrap_or(if self.format.is_numeric() {
            HorizontalAlignment::Right
        } else {
            HorizontalAlignment::Left
        })
    }
}

impl<R> Clone for Column<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            accessor: Arc::clone(&self.accessor),
            format: self.format,
            decimals: self.decimals,
            align: self.align,
            description: self.description.clone(),
            help: self.help.clone(),
            width: self.width,
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("format", &self.format)
            .field("decimals", &self.decimals)
            .finish_non_exhaustive()
    }
}

/// Check that the column list is non-empty and keys are unique
pub(crate) fn validate_columns<R>(columns: &[Column<R>]) -> Result<()> {
    if columns.is_empty() {
        return Err(RenderError::NoColumns);
    }
    for (i, col) in columns.iter().enumerate() {
        if columns[..i].iter().any(|c| c.key == col.key) {
            return Err(RenderError::DuplicateColumnKey(col.key.clone()));
        }
    }
    Ok(())
}
