//! # gridboard-csv
//!
//! CSV dataset loading and region export for gridboard.

mod error;
mod options;
mod reader;
mod record;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{LineTerminator, ReadOptions, WriteOptions};
pub use reader::{Dataset, DatasetReader};
pub use record::{field, Record};
pub use writer::RegionWriter;
