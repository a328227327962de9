//! Dynamic row records for CSV-backed tables

use gridboard_core::CellValue;
use gridboard_render::RowContext;
use std::collections::HashMap;

/// A row whose fields are looked up by name
///
/// Records are the row context for tables built from CSV data, where the
/// column set is only known at runtime. Missing fields read as
/// [`CellValue::Empty`], which renders blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, CellValue>,
    group_key: Option<String>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value
    pub fn set<K, V>(&mut self, name: K, value: V)
    where
        K: Into<String>,
        V: Into<CellValue>,
    {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a field value, blank when the field is absent
    pub fn get(&self, name: &str) -> CellValue {
        self.fields.get(name).cloned().unwrap_or(CellValue::Empty)
    }

    /// Set the group key used for span grouping
    pub fn set_group_key<K: Into<String>>(&mut self, key: K) {
        self.group_key = Some(key.into());
    }
}

impl RowContext for Record {
    fn group_key(&self) -> Option<&str> {
        self.group_key.as_deref()
    }
}

/// Column accessor reading a named record field
///
/// # Example
///
/// ```rust
/// use gridboard_csv::{field, Record};
/// use gridboard_render::Column;
///
/// let column = Column::new("amount", "Amount", field("amount"));
///
/// let mut record = Record::new();
/// record.set("amount", 12.5);
/// assert_eq!(column.value_of(&record), 12.5.into());
/// ```
pub fn field<K: Into<String>>(name: K) -> impl Fn(&Record) -> CellValue {
    let name = name.into();
    move |record: &Record| record.get(&name)
}
