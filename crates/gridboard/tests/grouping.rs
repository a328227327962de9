//! Span grouping and partition validation tests

use gridboard::prelude::*;

struct Quarter {
    name: String,
    revenue: f64,
}

impl Quarter {
    fn new(name: &str, revenue: f64) -> Self {
        Self {
            name: name.into(),
            revenue,
        }
    }
}

impl RowContext for Quarter {
    fn group_key(&self) -> Option<&str> {
        Some(&self.name)
    }
}

fn quarter_table() -> Table<Quarter> {
    Table::new()
        .column(Column::new("quarter", "Quarter", |q: &Quarter| {
            q.name.clone().into()
        }))
        .column(
            Column::new("revenue", "Revenue", |q: &Quarter| q.revenue.into())
                .format(ValueFormat::Currency),
        )
}

/// Four quarters at span 3 fill exactly twelve data rows with merged blocks
#[test]
fn test_quarterly_spans_tile_twelve_rows() {
    let mut grid = SheetGrid::new("Dashboard");
    let spans = RowSpans::new()
        .span("Q1", 3)
        .span("Q2", 3)
        .span("Q3", 3)
        .span("Q4", 3);
    let table = quarter_table().spans(spans);
    let rows = vec![
        Quarter::new("Q1", 1200.0),
        Quarter::new("Q2", 1350.0),
        Quarter::new("Q3", 990.0),
        Quarter::new("Q4", 1500.0),
    ];

    let bounds = table.render(&mut grid, GridPos::new(0, 0), &rows).unwrap();

    assert_eq!(bounds.data_start_row, 1);
    assert_eq!(bounds.data_end_row, Some(12));
    assert_eq!(bounds.data_row_count(), 12);

    // One merged block of height 3 per quarter per column
    let merges = grid.merged_regions();
    assert_eq!(merges.len(), 8);
    assert!(merges.iter().all(|r| r.row_count() == 3));

    assert_eq!(grid.get_value_at(1, 0), CellValue::string("Q1"));
    assert!(grid.is_merge_shadow(2, 0));
    assert!(grid.is_merge_shadow(3, 0));
    assert_eq!(grid.get_value_at(4, 0), CellValue::string("Q2"));
    assert_eq!(grid.get_value_at(10, 1), CellValue::Number(1500.0));
}

/// Spanned rows still aggregate once per logical row
#[test]
fn test_summary_over_spanned_rows_counts_each_group_once() {
    let mut grid = SheetGrid::new("Dashboard");
    let spans = RowSpans::new().span("Q1", 2).span("Q2", 2);
    let table = quarter_table()
        .spans(spans)
        .summary("revenue", SummaryRule::sum());
    let rows = vec![Quarter::new("Q1", 100.0), Quarter::new("Q2", 50.0)];

    let bounds = table.render(&mut grid, GridPos::new(0, 0), &rows).unwrap();

    let summary = bounds.summary_row.unwrap();
    assert_eq!(summary, 5);
    assert_eq!(
        grid.get_value_at(summary, 1),
        CellValue::string("Σ $150.00")
    );
}

/// Adjacent rows sharing a mapped key do not tile and are rejected
#[test]
fn test_monthly_rows_with_quarter_spans_rejected() {
    let mut grid = SheetGrid::new("Dashboard");
    let spans = RowSpans::new()
        .span("Q1", 3)
        .span("Q2", 3)
        .span("Q3", 3)
        .span("Q4", 3);
    let table = quarter_table().spans(spans);

    let rows: Vec<Quarter> = (0..12)
        .map(|month| Quarter::new(["Q1", "Q2", "Q3", "Q4"][month / 3], 100.0))
        .collect();

    let err = table
        .render(&mut grid, GridPos::new(0, 0), &rows)
        .unwrap_err();
    assert!(matches!(err, RenderError::SpanPartition(key) if key == "Q1"));
}

/// Keys missing from the span map default silently to one row each
#[test]
fn test_unmapped_keys_default_to_single_rows() {
    let mut grid = SheetGrid::new("Dashboard");
    let table = quarter_table().spans(RowSpans::new().span("H1", 6));
    let rows = vec![
        Quarter::new("north", 10.0),
        Quarter::new("south", 20.0),
        Quarter::new("east", 30.0),
    ];

    let bounds = table.render(&mut grid, GridPos::new(0, 0), &rows).unwrap();

    assert_eq!(bounds.data_row_count(), 3);
    assert!(grid.merged_regions().is_empty());
}

/// Adjacent duplicate keys are fine when the map does not cover them
#[test]
fn test_adjacent_unmapped_duplicates_are_allowed() {
    let mut grid = SheetGrid::new("Dashboard");
    let table = quarter_table().spans(RowSpans::new().span("other", 2));
    let rows = vec![Quarter::new("north", 10.0), Quarter::new("north", 20.0)];

    let bounds = table.render(&mut grid, GridPos::new(0, 0), &rows).unwrap();
    assert_eq!(bounds.data_row_count(), 2);
}
