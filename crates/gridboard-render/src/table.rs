//! Declarative table definition and the render entry point

use crate::column::{validate_columns, Column};
use crate::config::RenderConfig;
use crate::decor;
use crate::error::{RenderError, Result};
use crate::layout::{LayoutPlan, TableBounds};
use crate::rows::{write_rows, RowContext, RowSpans};
use crate::summary::{write_summary_row, SummaryRule};
use gridboard_core::{CellValue, GridPos, GridRange, GridSurface};
use std::collections::HashMap;
use std::fmt;

/// Title placement for a table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Title {
    /// One text merged and centered across the table width
    Span(String),
    /// Three segments with the left and right pinned to the table edges
    ///
    /// Useful next to frozen columns, where the left segment stays visible
    /// while the rest of the table scrolls. Requires at least 3 columns.
    Split {
        left: String,
        middle: String,
        right: String,
    },
}

/// A declarative table: columns plus presentation options
///
/// The table is configuration only; it holds no grid state and may be
/// rendered any number of times, each call laid out fresh from its origin.
///
/// # Example
///
/// ```rust
/// use gridboard_core::{GridPos, SheetGrid};
/// use gridboard_render::{Column, RowContext, SummaryRule, Table, ValueFormat};
///
/// struct Sale {
///     item: String,
///     total: f64,
/// }
///
/// impl RowContext for Sale {}
///
/// let table = Table::new()
///     .title("Sales")
///     .column(Column::new("item", "Item", |s: &Sale| s.item.clone().into()))
///     .column(
///         Column::new("total", "Total", |s: &Sale| s.total.into())
///             .format(ValueFormat::Currency),
///     )
///     .summary("total", SummaryRule::sum());
///
/// let rows = vec![
///     Sale { item: "widget".into(), total: 10.5 },
///     Sale { item: "gadget".into(), total: 5.25 },
/// ];
///
/// let mut grid = SheetGrid::new("Dashboard");
/// let bounds = table.render(&mut grid, GridPos::new(0, 0), &rows).unwrap();
/// assert_eq!(bounds.summary_row, Some(4));
/// ```
pub struct Table<R> {
    columns: Vec<Column<R>>,
    title: Option<Title>,
    headers: bool,
    description_row: bool,
    zebra: bool,
    signal_keys: Vec<String>,
    summaries: HashMap<String, SummaryRule>,
    spans: RowSpans,
    config: RenderConfig,
}

impl<R> Table<R> {
    /// Create an empty table with headers on and zebra banding on
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
            title: None,
            headers: true,
            description_row: false,
            zebra: true,
            signal_keys: Vec::new(),
            summaries: HashMap::new(),
            spans: RowSpans::new(),
            config: RenderConfig::new(),
        }
    }

    /// Append a column
    pub fn column(mut self, column: Column<R>) -> Self {
        self.columns.push(column);
        self
    }

    /// Append several columns
    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = Column<R>>,
    {
        self.columns.extend(columns);
        self
    }

    /// Set a title merged across the table width
    pub fn title<S: Into<String>>(mut self, text: S) -> Self {
        self.title = Some(Title::Span(text.into()));
        self
    }

    /// Set a three-part title with edge-pinned left and right segments
    pub fn split_title<L, M, T>(mut self, left: L, middle: M, right: T) -> Self
    where
        L: Into<String>,
        M: Into<String>,
        T: Into<String>,
    {
        self.title = Some(Title::Split {
            left: left.into(),
            middle: middle.into(),
            right: right.into(),
        });
        self
    }

    /// Toggle the header row
    pub fn headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }

    /// Toggle the per-column description row under the headers
    ///
    /// The row only renders when headers are on; without headers there is
    /// nothing to describe.
    pub fn description_row(mut self, description_row: bool) -> Self {
        self.description_row = description_row;
        self
    }

    /// Toggle zebra banding over the data rows
    pub fn zebra(mut self, zebra: bool) -> Self {
        self.zebra = zebra;
        self
    }

    /// Color a column's values by sign, green for gains and red for losses
    pub fn signal_column<K: Into<String>>(mut self, key: K) -> Self {
        self.signal_keys.push(key.into());
        self
    }

    /// Add a summary aggregate for a column
    ///
    /// Any summary reserves the summary row; a [`SummaryRule::none`] entry
    /// keeps its column blank while still reserving the row.
    pub fn summary<K: Into<String>>(mut self, key: K, rule: SummaryRule) -> Self {
        self.summaries.insert(key.into(), rule);
        self
    }

    /// Set the row span map for grouped rows
    pub fn spans(mut self, spans: RowSpans) -> Self {
        self.spans = spans;
        self
    }

    /// Replace the render configuration
    pub fn config(mut self, config: RenderConfig) -> Self {
        self.config = config;
        self
    }

    /// Render the table into `grid` with its top-left cell at `origin`
    ///
    /// Lays out title, header, description, data, and summary rows in
    /// order, then runs the decoration pass over the finished region.
    /// The same table may be rendered repeatedly; every call re-lays-out
    /// from scratch, so re-rendering over a stale region requires the
    /// caller to clear it first.
    pub fn render<S>(&self, grid: &mut S, origin: GridPos, rows: &[R]) -> Result<TableBounds>
    where
        S: GridSurface + ?Sized,
        R: RowContext,
    {
        validate_columns(&self.columns)?;
        self.validate_summaries()?;

        let count = self.columns.len() as u16;
        let end_col = origin.col + count - 1;
        if matches!(self.title, Some(Title::Split { .. })) && count < 3 {
            return Err(RenderError::TitleSplitTooWide(count));
        }

        let plan = LayoutPlan::plan(
            origin.row,
            self.title.is_some(),
            self.headers,
            self.description_row,
        );

        if let (Some(row), Some(title)) = (plan.title_row, &self.title) {
            write_title(grid, row, origin.col, end_col, title)?;
        }

        if let Some(row) = plan.header_row {
            let labels: Vec<CellValue> = self
                .columns
                .iter()
                .map(|c| CellValue::string(c.label()))
                .collect();
            grid.set_values(row, origin.col, &[labels])?;
        }

        if let Some(row) = plan.description_row {
            let texts: Vec<CellValue> = self
                .columns
                .iter()
                .map(|c| c.description_text().map_or(CellValue::Empty, CellValue::string))
                .collect();
            grid.set_values(row, origin.col, &[texts])?;
        }

        let data_end_row = write_rows(
            grid,
            plan.data_start_row,
            origin.col,
            &self.columns,
            rows,
            &self.spans,
        )?;

        let summary_row = if self.summaries.is_empty() {
            None
        } else {
            let row = data_end_row.map_or(plan.data_start_row, |end| end + 1);
            let data_rows = data_end_row.map(|end| (plan.data_start_row, end));
            write_summary_row(
                grid,
                row,
                origin.col,
                &self.columns,
                &self.summaries,
                data_rows,
                &self.config,
            )?;
            Some(row)
        };

        let bounds = TableBounds {
            origin,
            end_col,
            title_row: plan.title_row,
            header_row: plan.header_row,
            description_row: plan.description_row,
            data_start_row: plan.data_start_row,
            data_end_row,
            summary_row,
        };

        decor::apply_styles(
            grid,
            &bounds,
            &self.columns,
            matches!(self.title, Some(Title::Split { .. })),
            self.zebra,
            &self.signal_keys,
            &self.config,
        )?;

        log::debug!(
            "rendered table at {} over rows {}..={}",
            origin,
            bounds.start_row(),
            bounds.end_row()
        );
        Ok(bounds)
    }

    fn validate_summaries(&self) -> Result<()> {
        for key in self.summaries.keys() {
            if !self.columns.iter().any(|c| c.key() == key) {
                return Err(RenderError::UnknownSummaryColumn(key.clone()));
            }
        }
        Ok(())
    }
}

impl<R> Default for Table<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("title", &self.title)
            .field("headers", &self.headers)
            .field("zebra", &self.zebra)
            .finish_non_exhaustive()
    }
}

fn write_title<S>(grid: &mut S, row: u32, start_col: u16, end_col: u16, title: &Title) -> Result<()>
where
    S: GridSurface + ?Sized,
{
    match title {
        Title::Span(text) => {
            grid.set_values(row, start_col, &[vec![CellValue::string(text.as_str())]])?;
            if end_col > start_col {
                grid.merge(&GridRange::from_indices(row, start_col, row, end_col))?;
            }
        }
        Title::Split {
            left,
            middle,
            right,
        } => {
            grid.set_values(row, start_col, &[vec![CellValue::string(left.as_str())]])?;
            grid.set_values(
                row,
                start_col + 1,
                &[vec![CellValue::string(middle.as_str())]],
            )?;
            grid.set_values(row, end_col, &[vec![CellValue::string(right.as_str())]])?;
            // Middle segment takes every column between the pinned edges
            if end_col - start_col >= 3 {
                grid.merge(&GridRange::from_indices(
                    row,
                    start_col + 1,
                    row,
                    end_col - 1,
                ))?;
            }
        }
    }
    Ok(())
}
