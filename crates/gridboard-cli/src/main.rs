//! Gridboard CLI - render CSV datasets as dashboard tables

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use gridboard::prelude::*;
use gridboard::{format_value, resolve_decimals};
use serde::Deserialize;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridboard")]
#[command(author, version, about = "Render CSV datasets as styled dashboard tables")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a dataset with a table definition and export the region as CSV
    Render {
        /// Input CSV dataset
        data: PathBuf,

        /// Table definition file (JSON)
        table: PathBuf,

        /// Top-left cell of the table, in A1 notation
        #[arg(long, default_value = "A1")]
        origin: String,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Print a formatted text preview instead of raw CSV
        #[arg(short, long)]
        preview: bool,
    },

    /// Validate a table definition and show its columns
    Inspect {
        /// Table definition file (JSON)
        table: PathBuf,
    },
}

/// Table definition as loaded from JSON
#[derive(Debug, Deserialize)]
struct TableDefinition {
    title: Option<String>,
    split_title: Option<SplitTitleDefinition>,
    #[serde(default = "default_true")]
    headers: bool,
    #[serde(default)]
    description_row: bool,
    #[serde(default = "default_true")]
    zebra: bool,
    summary_label: Option<String>,
    group_column: Option<String>,
    #[serde(default)]
    spans: HashMap<String, u32>,
    #[serde(default)]
    signal_columns: Vec<String>,
    columns: Vec<ColumnDefinition>,
}

#[derive(Debug, Deserialize)]
struct SplitTitleDefinition {
    left: String,
    middle: String,
    right: String,
}

#[derive(Debug, Deserialize)]
struct ColumnDefinition {
    key: String,
    label: String,
    format: Option<String>,
    decimals: Option<u32>,
    align: Option<String>,
    description: Option<String>,
    help: Option<String>,
    width: Option<f64>,
    summary: Option<String>,
}

fn default_true() -> bool {
    true
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;

    match cli.command {
        Commands::Render {
            data,
            table,
            origin,
            out,
            preview,
        } => render_command(&data, &table, &origin, out.as_deref(), preview),
        Commands::Inspect { table } => inspect_command(&table),
    }
}

fn render_command(
    data: &Path,
    table_path: &Path,
    origin: &str,
    out: Option<&Path>,
    preview: bool,
) -> Result<()> {
    let definition = load_definition(table_path)?;
    let table = build_table(&definition)?;

    let options = ReadOptions {
        group_column: definition.group_column.clone(),
        ..ReadOptions::default()
    };
    let dataset = DatasetReader::read_file(data, &options)
        .with_context(|| format!("Failed to read '{}'", data.display()))?;

    let origin: GridPos = origin
        .parse()
        .with_context(|| format!("Invalid origin '{}'", origin))?;

    let mut grid = SheetGrid::new("Dashboard");
    let bounds = table
        .render_dataset(&mut grid, origin, &dataset)
        .context("Failed to render table")?;

    eprintln!(
        "Rendered {} records over rows {}..{}",
        dataset.len(),
        bounds.start_row() + 1,
        bounds.end_row() + 1
    );

    if preview {
        print_preview(&grid, &bounds, &definition)?;
    }

    if let Some(out_path) = out {
        RegionWriter::write_file(&grid, &bounds.region(), out_path, &WriteOptions::default())
            .with_context(|| format!("Failed to write '{}'", out_path.display()))?;
        eprintln!("Wrote '{}'", out_path.display());
    } else if !preview {
        let stdout = io::stdout();
        RegionWriter::write(
            &grid,
            &bounds.region(),
            stdout.lock(),
            &WriteOptions::default(),
        )
        .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn inspect_command(table_path: &Path) -> Result<()> {
    let definition = load_definition(table_path)?;

    // Surface bad formats, alignments, and summary operations up front
    build_table(&definition)?;

    println!("Table: {}", table_path.display());
    if let Some(title) = &definition.title {
        println!("Title: \"{}\"", title);
    }
    if let Some(split) = &definition.split_title {
        println!(
            "Title: \"{}\" | \"{}\" | \"{}\"",
            split.left, split.middle, split.right
        );
    }
    if let Some(group) = &definition.group_column {
        println!("Group column: {} ({} spans)", group, definition.spans.len());
    }
    println!("Columns: {}", definition.columns.len());

    for column in &definition.columns {
        let format = column.format.as_deref().unwrap_or("text");
        let mut extras = Vec::new();
        if let Some(decimals) = column.decimals {
            extras.push(format!("decimals={}", decimals));
        }
        if let Some(summary) = &column.summary {
            extras.push(format!("summary={}", summary));
        }
        if definition.signal_columns.contains(&column.key) {
            extras.push("signal".to_string());
        }
        let extras = if extras.is_empty() {
            String::new()
        } else {
            format!("  [{}]", extras.join(", "))
        };
        println!("  {}  \"{}\"  {}{}", column.key, column.label, format, extras);
    }

    Ok(())
}

fn load_definition(path: &Path) -> Result<TableDefinition> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to open '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid table definition '{}'", path.display()))
}

fn build_table(definition: &TableDefinition) -> Result<Table<Record>> {
    let mut table = Table::new()
        .headers(definition.headers)
        .description_row(definition.description_row)
        .zebra(definition.zebra);

    if let Some(title) = &definition.title {
        table = table.title(title.clone());
    }
    if let Some(split) = &definition.split_title {
        table = table.split_title(split.left.clone(), split.middle.clone(), split.right.clone());
    }
    if let Some(label) = &definition.summary_label {
        table = table.config(RenderConfig::new().summary_label(label.clone()));
    }

    let mut spans = RowSpans::new();
    for (key, span) in &definition.spans {
        spans = spans.span(key.clone(), *span);
    }
    table = table.spans(spans);

    for key in &definition.signal_columns {
        table = table.signal_column(key.clone());
    }

    for column in &definition.columns {
        table = table.column(build_column(column)?);
        if let Some(summary) = &column.summary {
            table = table.summary(column.key.clone(), parse_summary(summary)?);
        }
    }

    Ok(table)
}

fn build_column(definition: &ColumnDefinition) -> Result<Column<Record>> {
    let mut column = Column::new(
        definition.key.clone(),
        definition.label.clone(),
        field(definition.key.clone()),
    );

    if let Some(format) = &definition.format {
        let format: ValueFormat = format
            .parse()
            .with_context(|| format!("Column '{}'", definition.key))?;
        column = column.format(format);
    }
    if let Some(decimals) = definition.decimals {
        column = column.decimals(decimals);
    }
    if let Some(align) = &definition.align {
        column = column.align(parse_alignment(align).with_context(|| format!("Column '{}'", definition.key))?);
    }
    if let Some(description) = &definition.description {
        column = column.description(description.clone());
    }
    if let Some(help) = &definition.help {
        column = column.help(help.clone());
    }
    if let Some(width) = definition.width {
        column = column.width(width);
    }

    Ok(column)
}

fn parse_alignment(value: &str) -> Result<HorizontalAlignment> {
    match value {
        "left" => Ok(HorizontalAlignment::Left),
        "center" => Ok(HorizontalAlignment::Center),
        "right" => Ok(HorizontalAlignment::Right),
        _ => bail!("Unknown alignment '{}'", value),
    }
}

fn parse_summary(value: &str) -> Result<SummaryRule> {
    match value {
        "sum" => Ok(SummaryRule::sum()),
        "avg" => Ok(SummaryRule::avg()),
        "none" => Ok(SummaryRule::none()),
        _ => bail!("Unknown summary operation '{}'", value),
    }
}

/// Print the rendered region as aligned text, applying column formats
fn print_preview(grid: &SheetGrid, bounds: &TableBounds, definition: &TableDefinition) -> Result<()> {
    let mut formats = Vec::new();
    for column in &definition.columns {
        let format: ValueFormat = match &column.format {
            Some(text) => text.parse()?,
            None => ValueFormat::Text,
        };
        let decimals = resolve_decimals(None, column.decimals, format);
        let numeric_default = if format.is_numeric() {
            HorizontalAlignment::Right
        } else {
            HorizontalAlignment::Left
        };
        let align = match &column.align {
            Some(text) => parse_alignment(text)?,
            None => numeric_default,
        };
        formats.push((format, decimals, align));
    }

    let data_rows = bounds
        .data_end_row
        .map(|end| bounds.data_start_row..=end);

    let mut matrix: Vec<Vec<String>> = Vec::new();
    for row in bounds.start_row()..=bounds.end_row() {
        let in_data = data_rows.as_ref().map_or(false, |r| r.contains(&row));
        let mut line = Vec::new();
        for (i, (format, decimals, _)) in formats.iter().enumerate() {
            let value = grid.get_value_at(row, bounds.start_col() + i as u16);
            let text = if in_data {
                format_value(&value, *format, *decimals)
            } else {
                value.to_string()
            };
            line.push(text);
        }
        matrix.push(line);
    }

    let widths: Vec<usize> = (0..formats.len())
        .map(|i| {
            matrix
                .iter()
                .map(|line| line[i].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    for line in &matrix {
        let rendered: Vec<String> = line
            .iter()
            .zip(formats.iter().zip(widths.iter()))
            .map(|(text, ((_, _, align), width))| match align {
                HorizontalAlignment::Right => format!("{:>w$}", text, w = *width),
                _ => format!("{:<w$}", text, w = *width),
            })
            .collect();
        println!("{}", rendered.join("  ").trim_end());
    }

    Ok(())
}
