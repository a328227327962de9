//! Summary row aggregation

use crate::column::Column;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::format::{format_value, resolve_decimals, ValueFormat};
use gridboard_core::{CellValue, GridPos, GridRange, GridSurface, HorizontalAlignment, StylePatch};
use std::collections::HashMap;

/// Aggregate applied to a column in the summary row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryOp {
    /// Sum of the column's numeric values, prefixed with a sigma glyph
    #[default]
    Sum,
    /// Mean of the column's numeric values, prefixed with an x-bar glyph
    Avg,
    /// Explicitly exclude the column from the summary row
    None,
}

impl SummaryOp {
    /// Glyph prepended to the formatted aggregate
    pub fn glyph(&self) -> &'static str {
        match self {
            SummaryOp::Sum => "\u{03a3} ",
            SummaryOp::Avg => "x\u{0304} ",
            SummaryOp::None => "",
        }
    }
}

/// Summary configuration for a single column
///
/// The rule carries an optional format and decimal override; when unset,
/// the aggregate inherits the column's own format and decimals.
///
/// # Example
///
/// ```rust
/// use gridboard_render::{SummaryRule, ValueFormat};
///
/// let rule = SummaryRule::avg().with_format(ValueFormat::Number).with_decimals(0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SummaryRule {
    pub op: SummaryOp,
    pub format: Option<ValueFormat>,
    pub decimals: Option<u32>,
}

impl SummaryRule {
    /// Sum the column
    pub fn sum() -> Self {
        Self {
            op: SummaryOp::Sum,
            ..Self::default()
        }
    }

    /// Average the column
    pub fn avg() -> Self {
        Self {
            op: SummaryOp::Avg,
            ..Self::default()
        }
    }

    /// Exclude the column from the summary row
    pub fn none() -> Self {
        Self {
            op: SummaryOp::None,
            ..Self::default()
        }
    }

    /// Override the format used for the aggregate
    pub fn with_format(mut self, format: ValueFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Override the decimal places used for the aggregate
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = Some(decimals);
        self
    }
}

/// Write the summary row at `row`, aggregating over the data region
///
/// Aggregates read the data cells back from the grid, so they reflect
/// exactly what was materialized. Non-numeric cells are skipped; a column
/// with no numeric values stays blank rather than showing a zero. The
/// first column always carries the summary label, so an aggregate mapped
/// there is dropped with a warning.
pub(crate) fn write_summary_row<R, S>(
    grid: &mut S,
    row: u32,
    start_col: u16,
    columns: &[Column<R>],
    rules: &HashMap<String, SummaryRule>,
    data_rows: Option<(u32, u32)>,
    config: &RenderConfig,
) -> Result<()>
where
    S: GridSurface + ?Sized,
{
    let end_col = start_col + (columns.len() as u16 - 1);
    let row_range = GridRange::from_indices(row, start_col, row, end_col);
    grid.patch_style(
        &row_range,
        &StylePatch::new()
            .italic(true)
            .font_color(config.palette.summary_text)
            .fill_color(config.palette.summary_fill),
    )?;

    for (i, column) in columns.iter().enumerate() {
        let col = start_col + i as u16;
        let rule = rules.get(column.key());

        if i == 0 {
            if let Some(rule) = rule {
                if rule.op != SummaryOp::None {
                    log::warn!(
                        "summary label replaces the {:?} aggregate on first column '{}'",
                        rule.op,
                        column.key()
                    );
                }
            }
            grid.set_values(
                row,
                col,
                &[vec![CellValue::string(config.summary_label.as_str())]],
            )?;
            let cell = GridRange::single(GridPos::new(row, col));
            grid.patch_style(&cell, &StylePatch::new().horizontal(HorizontalAlignment::Left))?;
            continue;
        }

        let Some(rule) = rule else {
            continue;
        };
        if rule.op == SummaryOp::None {
            continue;
        }

        let numbers: Vec<f64> = match data_rows {
            Some((first, last)) => grid
                .get_values(&GridRange::from_indices(first, col, last, col))
                .into_iter()
                .flatten()
                .filter_map(|v| v.as_number())
                .collect(),
            None => Vec::new(),
        };

        // An empty subset leaves the cell blank; zero would misstate it
        if numbers.is_empty() {
            continue;
        }

        let aggregate = match rule.op {
            SummaryOp::Sum => numbers.iter().sum::<f64>(),
            SummaryOp::Avg => numbers.iter().sum::<f64>() / numbers.len() as f64,
            SummaryOp::None => continue,
        };

        let format = rule.format.unwrap_or(column.value_format());
        let decimals = resolve_decimals(rule.decimals, column.declared_decimals(), format);
        let text = format!(
            "{}{}",
            rule.op.glyph(),
            format_value(&CellValue::Number(aggregate), format, decimals)
        );

        grid.set_values(row, col, &[vec![CellValue::string(text)]])?;
        let cell = GridRange::single(GridPos::new(row, col));
        grid.patch_style(&cell, &StylePatch::new().horizontal(column.data_alignment()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridboard_core::SheetGrid;
    use pretty_assertions::assert_eq;

    struct Item {
        name: String,
        price: f64,
    }

    fn item_columns() -> Vec<Column<Item>> {
        vec![
            Column::new("name", "Name", |i: &Item| i.name.clone().into()),
            Column::new("price", "Price", |i: &Item| i.price.into())
                .format(ValueFormat::Currency),
        ]
    }

    fn seed_grid(columns: &[Column<Item>], items: &[Item]) -> SheetGrid {
        let mut grid = SheetGrid::new("Test");
        for (r, item) in items.iter().enumerate() {
            let values: Vec<CellValue> = columns.iter().map(|c| c.value_of(item)).collect();
            grid.set_values(r as u32, 0, &[values]).unwrap();
        }
        grid
    }

    #[test]
    fn test_sum_with_currency_glyph() {
        let columns = item_columns();
        let items = vec![
            Item {
                name: "widget".into(),
                price: 10.5,
            },
            Item {
                name: "gadget".into(),
                price: 5.25,
            },
        ];
        let mut grid = seed_grid(&columns, &items);
        let rules = HashMap::from([("price".to_string(), SummaryRule::sum())]);
        let config = RenderConfig::new();

        write_summary_row(&mut grid, 2, 0, &columns, &rules, Some((0, 1)), &config).unwrap();

        assert_eq!(grid.get_value_at(2, 0), CellValue::string("Summary"));
        assert_eq!(grid.get_value_at(2, 1), CellValue::string("\u{03a3} $15.75"));
    }

    #[test]
    fn test_average_inherits_column_decimals() {
        let columns = vec![
            Column::new("name", "Name", |i: &Item| i.name.clone().into()),
            Column::new("price", "Price", |i: &Item| i.price.into())
                .format(ValueFormat::Number)
                .decimals(0),
        ];
        let items = vec![
            Item {
                name: "a".into(),
                price: 10.0,
            },
            Item {
                name: "b".into(),
                price: 30.0,
            },
        ];
        let mut grid = seed_grid(&columns, &items);
        let rules = HashMap::from([("price".to_string(), SummaryRule::avg())]);

        write_summary_row(
            &mut grid,
            2,
            0,
            &columns,
            &rules,
            Some((0, 1)),
            &RenderConfig::new(),
        )
        .unwrap();

        assert_eq!(grid.get_value_at(2, 1), CellValue::string("x\u{0304} 20"));
    }

    #[test]
    fn test_empty_subset_stays_blank() {
        let columns = item_columns();
        let mut grid = SheetGrid::new("Test");
        grid.set_values(0, 0, &[vec!["n/a".into(), "n/a".into()]])
            .unwrap();
        let rules = HashMap::from([("price".to_string(), SummaryRule::sum())]);

        write_summary_row(
            &mut grid,
            1,
            0,
            &columns,
            &rules,
            Some((0, 0)),
            &RenderConfig::new(),
        )
        .unwrap();

        assert_eq!(grid.get_value_at(1, 1), CellValue::Empty);
    }

    #[test]
    fn test_no_data_rows_stays_blank() {
        let columns = item_columns();
        let mut grid = SheetGrid::new("Test");
        let rules = HashMap::from([("price".to_string(), SummaryRule::sum())]);

        write_summary_row(&mut grid, 0, 0, &columns, &rules, None, &RenderConfig::new()).unwrap();

        assert_eq!(grid.get_value_at(0, 0), CellValue::string("Summary"));
        assert_eq!(grid.get_value_at(0, 1), CellValue::Empty);
    }

    #[test]
    fn test_label_wins_over_first_column_aggregate() {
        let columns = item_columns();
        let items = vec![Item {
            name: "only".into(),
            price: 4.0,
        }];
        let mut grid = seed_grid(&columns, &items);
        let rules = HashMap::from([("name".to_string(), SummaryRule::sum())]);

        write_summary_row(
            &mut grid,
            1,
            0,
            &columns,
            &rules,
            Some((0, 0)),
            &RenderConfig::new(),
        )
        .unwrap();

        assert_eq!(grid.get_value_at(1, 0), CellValue::string("Summary"));
    }

    #[test]
    fn test_none_rule_excludes_column() {
        let columns = item_columns();
        let items = vec![Item {
            name: "only".into(),
            price: 4.0,
        }];
        let mut grid = seed_grid(&columns, &items);
        let rules = HashMap::from([("price".to_string(), SummaryRule::none())]);

        write_summary_row(
            &mut grid,
            1,
            0,
            &columns,
            &rules,
            Some((0, 0)),
            &RenderConfig::new(),
        )
        .unwrap();

        assert_eq!(grid.get_value_at(1, 1), CellValue::Empty);
    }

    #[test]
    fn test_rule_format_override() {
        let columns = item_columns();
        let items = vec![
            Item {
                name: "a".into(),
                price: 0.05,
            },
            Item {
                name: "b".into(),
                price: 0.1,
            },
        ];
        let mut grid = seed_grid(&columns, &items);
        let rules = HashMap::from([(
            "price".to_string(),
            SummaryRule::sum().with_format(ValueFormat::Percent),
        )]);

        write_summary_row(
            &mut grid,
            2,
            0,
            &columns,
            &rules,
            Some((0, 1)),
            &RenderConfig::new(),
        )
        .unwrap();

        assert_eq!(
            grid.get_value_at(2, 1),
            CellValue::string("\u{03a3} 15.00%")
        );
    }
}
