//! CSV region writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{LineTerminator, WriteOptions};
use gridboard_core::{GridRange, GridSurface};

/// Writes a rectangular grid region as CSV
///
/// Cells are exported as their display text; merge shadows and empty
/// cells become empty fields. Rendered number formats are presentation
/// state and are not applied here, so exported values stay raw.
pub struct RegionWriter;

impl RegionWriter {
    /// Write a grid region to a CSV file
    pub fn write_file<G, P>(
        grid: &G,
        range: &GridRange,
        path: P,
        options: &WriteOptions,
    ) -> CsvResult<()>
    where
        G: GridSurface + ?Sized,
        P: AsRef<Path>,
    {
        let file = File::create(path)?;
        Self::write(grid, range, file, options)
    }

    /// Write a grid region to a writer
    pub fn write<G, W>(
        grid: &G,
        range: &GridRange,
        writer: W,
        options: &WriteOptions,
    ) -> CsvResult<()>
    where
        G: GridSurface + ?Sized,
        W: Write,
    {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .from_writer(writer);

        for row_values in grid.get_values(range) {
            let record: Vec<String> = row_values.iter().map(|v| v.to_string()).collect();
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
