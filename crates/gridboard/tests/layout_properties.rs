//! Property tests for layout row accounting

use gridboard::prelude::*;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct Row {
    group: String,
    value: f64,
}

impl RowContext for Row {
    fn group_key(&self) -> Option<&str> {
        Some(&self.group)
    }
}

fn row_table() -> Table<Row> {
    Table::new()
        .column(Column::new("group", "Group", |r: &Row| r.group.clone().into()))
        .column(Column::new("value", "Value", |r: &Row| r.value.into()).format(ValueFormat::Number))
}

// Strategy for ungrouped datasets of varying lengths
fn rows_strategy() -> impl Strategy<Value = Vec<Row>> {
    prop::collection::vec(
        ("[a-z]{1,8}", -1000.0f64..1000.0).prop_map(|(group, value)| Row { group, value }),
        0..40,
    )
}

// Strategy for distinct-keyed groups with spans, one logical row per group
fn groups_strategy() -> impl Strategy<Value = Vec<(Row, u32)>> {
    prop::collection::vec((-1000.0f64..1000.0, 1u32..5), 1..12).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (value, span))| {
                (
                    Row {
                        group: format!("group{}", i),
                        value,
                    },
                    span,
                )
            })
            .collect()
    })
}

proptest! {
    /// Without a span map every row takes exactly one grid row
    #[test]
    fn test_unspanned_rows_occupy_one_row_each(rows in rows_strategy()) {
        let mut grid = SheetGrid::new("Test");
        let bounds = row_table()
            .render(&mut grid, GridPos::new(0, 0), &rows)
            .unwrap();

        prop_assert_eq!(bounds.data_row_count() as usize, rows.len());
        if let Some(end) = bounds.data_end_row {
            prop_assert_eq!((end - bounds.data_start_row + 1) as usize, rows.len());
        } else {
            prop_assert_eq!(rows.len(), 0);
        }
    }

    /// With a span map the data region height equals the sum of the spans
    #[test]
    fn test_spanned_rows_consume_sum_of_spans(groups in groups_strategy()) {
        let mut spans = RowSpans::new();
        for (row, span) in &groups {
            spans = spans.span(row.group.clone(), *span);
        }
        let rows: Vec<Row> = groups.iter().map(|(row, _)| row.clone()).collect();
        let expected: u32 = groups.iter().map(|(_, span)| *span).sum();

        let mut grid = SheetGrid::new("Test");
        let bounds = row_table()
            .spans(spans)
            .render(&mut grid, GridPos::new(0, 0), &rows)
            .unwrap();

        prop_assert_eq!(bounds.data_row_count(), expected);
    }

    /// Two renders of the same input into disjoint regions read back identically
    #[test]
    fn test_disjoint_renders_are_identical(rows in rows_strategy()) {
        let mut grid = SheetGrid::new("Test");
        let table = row_table().summary("value", SummaryRule::avg());

        let first = table.render(&mut grid, GridPos::new(0, 0), &rows).unwrap();
        let second = table.render(&mut grid, GridPos::new(0, 4), &rows).unwrap();

        prop_assert!(!first.region().overlaps(&second.region()));
        prop_assert_eq!(
            grid.get_values(&first.region()),
            grid.get_values(&second.region())
        );
    }
}
