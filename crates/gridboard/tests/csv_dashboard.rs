#![cfg(feature = "csv")]

//! CSV-to-dashboard pipeline tests

use gridboard::prelude::*;
use pretty_assertions::assert_eq;
use std::fs;

fn sales_table() -> Table<Record> {
    Table::new()
        .column(Column::new("item", "Item", field("item")))
        .column(Column::new("total", "Total", field("total")).format(ValueFormat::Currency))
        .summary("total", SummaryRule::sum())
}

/// Load a CSV file, render it, and check the aggregate
#[test]
fn test_csv_file_to_rendered_table() {
    let dir = tempfile::tempdir().unwrap();
    let data_path = dir.path().join("sales.csv");
    fs::write(&data_path, "item,total\nwidget,10.5\ngadget,5.25\n").unwrap();

    let dataset = DatasetReader::read_file(&data_path, &ReadOptions::default()).unwrap();
    assert_eq!(dataset.columns, vec!["item", "total"]);
    assert_eq!(dataset.len(), 2);

    let mut grid = SheetGrid::new("Dashboard");
    let bounds = sales_table()
        .render_dataset(&mut grid, GridPos::new(0, 0), &dataset)
        .unwrap();

    assert_eq!(bounds.data_end_row, Some(2));
    assert_eq!(grid.get_value_at(1, 1), CellValue::Number(10.5));
    assert_eq!(
        grid.get_value_at(bounds.summary_row.unwrap(), 1),
        CellValue::string("Σ $15.75")
    );
}

/// Export a rendered region back out as CSV text
#[test]
fn test_region_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let data_path = dir.path().join("sales.csv");
    let out_path = dir.path().join("report.csv");
    fs::write(&data_path, "item,total\nwidget,10.5\ngadget,5.25\n").unwrap();

    let dataset = DatasetReader::read_file(&data_path, &ReadOptions::default()).unwrap();
    let mut grid = SheetGrid::new("Dashboard");
    let bounds = sales_table()
        .render_dataset(&mut grid, GridPos::new(0, 0), &dataset)
        .unwrap();

    RegionWriter::write_file(&grid, &bounds.region(), &out_path, &WriteOptions::default())
        .unwrap();

    let text = fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        text,
        "Item,Total\r\nwidget,10.5\r\ngadget,5.25\r\nSummary,Σ $15.75\r\n"
    );
}

/// Unix line endings when requested
#[test]
fn test_region_export_with_lf_terminator() {
    let mut grid = SheetGrid::new("Dashboard");
    grid.set_values(
        0,
        0,
        &[
            vec![CellValue::string("a"), CellValue::Number(1.0)],
            vec![CellValue::string("b"), CellValue::Number(2.0)],
        ],
    )
    .unwrap();

    let mut out = Vec::new();
    let options = WriteOptions {
        line_terminator: gridboard::LineTerminator::LF,
        ..WriteOptions::default()
    };
    RegionWriter::write(&grid, &GridRange::from_indices(0, 0, 1, 1), &mut out, &options).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "a,1\nb,2\n");
}

/// Group keys from a CSV column drive span grouping end to end
#[test]
fn test_grouped_csv_renders_merged_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let data_path = dir.path().join("quarters.csv");
    fs::write(
        &data_path,
        "quarter,revenue\nQ1,1200\nQ2,1350\nQ3,990\nQ4,1500\n",
    )
    .unwrap();

    let options = ReadOptions {
        group_column: Some("quarter".to_string()),
        ..ReadOptions::default()
    };
    let dataset = DatasetReader::read_file(&data_path, &options).unwrap();

    let table = Table::new()
        .column(Column::new("quarter", "Quarter", field("quarter")))
        .column(Column::new("revenue", "Revenue", field("revenue")).format(ValueFormat::Number))
        .spans(
            RowSpans::new()
                .span("Q1", 3)
                .span("Q2", 3)
                .span("Q3", 3)
                .span("Q4", 3),
        );

    let mut grid = SheetGrid::new("Dashboard");
    let bounds = table
        .render_dataset(&mut grid, GridPos::new(0, 0), &dataset)
        .unwrap();

    assert_eq!(bounds.data_row_count(), 12);
    assert_eq!(grid.merged_regions().len(), 8);

    // Shadow cells export as empty fields
    let mut out = Vec::new();
    RegionWriter::write(
        &grid,
        &GridRange::from_indices(1, 0, 3, 1),
        &mut out,
        &WriteOptions::default(),
    )
    .unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Q1,1200\r\n,\r\n,\r\n"
    );
}
