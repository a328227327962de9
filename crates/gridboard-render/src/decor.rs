//! Decoration pass over a rendered table region
//!
//! Styling runs after every value is written. The pass is linear: each
//! responsibility touches its own slice of the region, with fills applied
//! before borders so the borders survive.

use crate::column::Column;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::format::resolve_decimals;
use crate::layout::TableBounds;
use gridboard_core::{
    BorderEdge, GridPos, GridRange, GridSurface, HorizontalAlignment, RangeBorder, StylePatch,
};

/// Apply the full decoration pass for a rendered table
///
/// Order: title and header emphasis, description row, header notes, zebra
/// banding, number formats, sign coloring, borders, alignment, widths.
pub(crate) fn apply_styles<R, S>(
    grid: &mut S,
    bounds: &TableBounds,
    columns: &[Column<R>],
    split_title: bool,
    zebra: bool,
    signal_keys: &[String],
    config: &RenderConfig,
) -> Result<()>
where
    S: GridSurface + ?Sized,
{
    let start_col = bounds.start_col();
    let end_col = bounds.end_col;

    if let Some(row) = bounds.title_row {
        style_title(grid, row, start_col, end_col, split_title, config)?;
    }

    if let Some(row) = bounds.header_row {
        let range = GridRange::from_indices(row, start_col, row, end_col);
        grid.patch_style(
            &range,
            &StylePatch::new()
                .bold(true)
                .fill_color(config.palette.header_fill)
                .font_color(config.palette.header_text)
                .horizontal(HorizontalAlignment::Center),
        )?;

        for (i, column) in columns.iter().enumerate() {
            if let Some(help) = column.help_text() {
                grid.set_note(row, start_col + i as u16, help)?;
            }
        }
    }

    if let Some(row) = bounds.description_row {
        let range = GridRange::from_indices(row, start_col, row, end_col);
        grid.patch_style(
            &range,
            &StylePatch::new()
                .italic(true)
                .font_size(config.description_font_size)
                .font_color(config.palette.summary_text)
                .wrap_text(true),
        )?;
    }

    if let Some(data) = bounds.data_region() {
        if zebra {
            apply_zebra(grid, &data, config)?;
        }
        apply_number_formats(grid, &data, columns)?;
        apply_sign_colors(grid, &data, columns, signal_keys, config)?;
    }

    apply_borders(grid, bounds)?;

    if let Some(data) = bounds.data_region() {
        for (i, column) in columns.iter().enumerate() {
            let col = start_col + i as u16;
            let range = GridRange::from_indices(data.start.row, col, data.end.row, col);
            grid.patch_style(
                &range,
                &StylePatch::new().horizontal(column.data_alignment()),
            )?;
        }
    }

    for (i, column) in columns.iter().enumerate() {
        let col = start_col + i as u16;
        match column.declared_width() {
            Some(width) => grid.set_column_width(col, width)?,
            None => grid.auto_fit_column(col, config.column_padding)?,
        }
    }

    Ok(())
}

fn style_title<S>(
    grid: &mut S,
    row: u32,
    start_col: u16,
    end_col: u16,
    split: bool,
    config: &RenderConfig,
) -> Result<()>
where
    S: GridSurface + ?Sized,
{
    let range = GridRange::from_indices(row, start_col, row, end_col);
    grid.patch_style(
        &range,
        &StylePatch::new()
            .bold(true)
            .font_size(config.title_font_size)
            .fill_color(config.palette.title_fill)
            .font_color(config.palette.title_text),
    )?;

    if split && end_col > start_col {
        // Left and right segments stay pinned to their edges
        grid.patch_style(
            &GridRange::single(GridPos::new(row, start_col)),
            &StylePatch::new().horizontal(HorizontalAlignment::Left),
        )?;
        grid.patch_style(
            &GridRange::single(GridPos::new(row, end_col)),
            &StylePatch::new().horizontal(HorizontalAlignment::Right),
        )?;
        if end_col - start_col >= 2 {
            grid.patch_style(
                &GridRange::from_indices(row, start_col + 1, row, end_col - 1),
                &StylePatch::new().horizontal(HorizontalAlignment::Center),
            )?;
        }
    } else {
        grid.patch_style(
            &range,
            &StylePatch::new().horizontal(HorizontalAlignment::Center),
        )?;
    }

    Ok(())
}

fn apply_zebra<S>(grid: &mut S, data: &GridRange, config: &RenderConfig) -> Result<()>
where
    S: GridSurface + ?Sized,
{
    let patch = StylePatch::new().fill_color(config.palette.zebra_fill);
    for row in data.start.row..=data.end.row {
        if (row - data.start.row) % 2 == 1 {
            let band = GridRange::from_indices(row, data.start.col, row, data.end.col);
            grid.patch_style(&band, &patch)?;
        }
    }
    Ok(())
}

fn apply_number_formats<R, S>(grid: &mut S, data: &GridRange, columns: &[Column<R>]) -> Result<()>
where
    S: GridSurface + ?Sized,
{
    for (i, column) in columns.iter().enumerate() {
        let format = column.value_format();
        let decimals = resolve_decimals(None, column.declared_decimals(), format);
        if let Some(pattern) = format.cell_pattern(decimals) {
            let col = data.start.col + i as u16;
            let range = GridRange::from_indices(data.start.row, col, data.end.row, col);
            grid.patch_style(&range, &StylePatch::new().number_format(pattern))?;
        }
    }
    Ok(())
}

fn apply_sign_colors<R, S>(
    grid: &mut S,
    data: &GridRange,
    columns: &[Column<R>],
    signal_keys: &[String],
    config: &RenderConfig,
) -> Result<()>
where
    S: GridSurface + ?Sized,
{
    for key in signal_keys {
        let Some(index) = columns.iter().position(|c| c.key() == key) else {
            log::warn!("signal column '{}' is not in the column list", key);
            continue;
        };
        let col = data.start.col + index as u16;
        let range = GridRange::from_indices(data.start.row, col, data.end.row, col);
        let values = grid.get_values(&range);

        for (offset, row_values) in values.iter().enumerate() {
            let Some(n) = row_values.first().and_then(|v| v.as_number()) else {
                continue;
            };
            let color = if n > 0.0 {
                config.palette.gain_text
            } else if n < 0.0 {
                config.palette.loss_text
            } else {
                continue;
            };
            let cell = GridRange::single(GridPos::new(data.start.row + offset as u32, col));
            grid.patch_style(&cell, &StylePatch::new().font_color(color))?;
        }
    }
    Ok(())
}

fn apply_borders<S>(grid: &mut S, bounds: &TableBounds) -> Result<()>
where
    S: GridSurface + ?Sized,
{
    let first = bounds.header_row.unwrap_or(bounds.data_start_row);
    let last = bounds.end_row();
    if last < first {
        return Ok(());
    }
    let range = GridRange::from_indices(first, bounds.start_col(), last, bounds.end_col);
    let border = RangeBorder::outline(BorderEdge::medium()).with_inner(BorderEdge::thin());
    Ok(grid.set_border(&range, &border)?)
}
