//! CSV dataset reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{CsvError, CsvResult};
use crate::options::ReadOptions;
use crate::record::Record;
use chrono::NaiveDate;
use gridboard_core::CellValue;

/// A loaded dataset: column names plus one record per CSV row
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Column names, from the header row or generated
    pub columns: Vec<String>,
    /// Records in file order
    pub records: Vec<Record>,
}

impl Dataset {
    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// CSV dataset reader
pub struct DatasetReader;

impl DatasetReader {
    /// Read a CSV file into a dataset
    pub fn read_file<P: AsRef<Path>>(path: P, options: &ReadOptions) -> CsvResult<Dataset> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a dataset
    ///
    /// Without a header row, columns are named `column_1` through
    /// `column_N`. When `group_column` names a column, each record's group
    /// key is taken from that column's value; blank values leave the
    /// record ungrouped.
    pub fn read<R: Read>(reader: R, options: &ReadOptions) -> CsvResult<Dataset> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(options.has_headers)
            .from_reader(reader);

        let mut columns: Vec<String> = Vec::new();
        if options.has_headers {
            let headers = csv_reader.headers()?;
            columns = headers.iter().map(String::from).collect();
        }

        let mut records = Vec::new();
        for result in csv_reader.records() {
            let row = result?;
            if columns.is_empty() {
                columns = (1..=row.len()).map(|i| format!("column_{}", i)).collect();
            }

            let mut record = Record::new();
            for (i, raw) in row.iter().enumerate() {
                let value = if options.detect_types {
                    Self::detect_type(raw)
                } else {
                    CellValue::string(raw)
                };
                record.set(columns[i].as_str(), value);
            }
            records.push(record);
        }

        if let Some(group_column) = &options.group_column {
            if !columns.iter().any(|c| c == group_column) {
                return Err(CsvError::MissingColumn(group_column.clone()));
            }
            for record in &mut records {
                match record.get(group_column) {
                    CellValue::Empty => {}
                    value => record.set_group_key(value.to_string()),
                }
            }
        }

        Ok(Dataset { columns, records })
    }

    /// Detect the type of a field value
    fn detect_type(raw: &str) -> CellValue {
        let raw = raw.trim();

        if raw.is_empty() {
            return CellValue::Empty;
        }

        match raw.to_lowercase().as_str() {
            "true" | "yes" => return CellValue::Boolean(true),
            "false" | "no" => return CellValue::Boolean(false),
            _ => {}
        }

        if let Ok(n) = raw.parse::<f64>() {
            return CellValue::Number(n);
        }

        if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return CellValue::Date(d);
        }

        CellValue::string(raw)
    }
}
