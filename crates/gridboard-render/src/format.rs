//! Value formatting

use crate::error::RenderError;
use chrono::Datelike;
use gridboard_core::{CellValue, NumberFormat};
use std::fmt;
use std::str::FromStr;

/// How a column's values are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValueFormat {
    /// Unformatted text
    #[default]
    Text,
    /// Thousands-grouped number
    Number,
    /// Dollar currency
    Currency,
    /// Fractional ratio shown as a percentage (0.0735 displays as 7.35%)
    Percent,
    /// Short date (m/d/yy)
    Date,
}

impl ValueFormat {
    /// Decimal places used when neither the caller nor the column says
    pub fn default_decimals(&self) -> u32 {
        match self {
            ValueFormat::Currency | ValueFormat::Percent => 2,
            _ => 0,
        }
    }

    /// Formats whose values are numbers
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            ValueFormat::Number | ValueFormat::Currency | ValueFormat::Percent
        )
    }

    /// The number-format pattern a data cell with this format carries
    pub(crate) fn cell_pattern(&self, decimals: u32) -> Option<NumberFormat> {
        match self {
            ValueFormat::Text => None,
            ValueFormat::Number => Some(NumberFormat::number(decimals)),
            ValueFormat::Currency => Some(NumberFormat::currency(decimals)),
            ValueFormat::Percent => Some(NumberFormat::percent(decimals)),
            ValueFormat::Date => Some(NumberFormat::date()),
        }
    }
}

impl fmt::Display for ValueFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueFormat::Text => "text",
            ValueFormat::Number => "number",
            ValueFormat::Currency => "currency",
            ValueFormat::Percent => "percent",
            ValueFormat::Date => "date",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for ValueFormat {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ValueFormat::Text),
            "number" => Ok(ValueFormat::Number),
            "currency" => Ok(ValueFormat::Currency),
            "percent" => Ok(ValueFormat::Percent),
            "date" => Ok(ValueFormat::Date),
            other => Err(RenderError::UnknownFormat(other.to_string())),
        }
    }
}

/// Resolve the decimal places for a formatted value
///
/// Precedence: explicit per-call override, then the column's declared
/// decimals, then the format's default.
pub fn resolve_decimals(explicit: Option<u32>, column: Option<u32>, format: ValueFormat) -> u32 {
    explicit
        .or(column)
        .unwrap_or_else(|| format.default_decimals())
}

/// Render a value as a display string
///
/// Non-numeric values handed to a numeric format are stringified as-is
/// rather than erroring; producers occasionally put sentinels like "N/A"
/// into numeric columns.
///
/// # Examples
///
/// ```rust
/// use gridboard_render::{format_value, ValueFormat};
/// use gridboard_core::CellValue;
///
/// let v = CellValue::Number(1234.5);
/// assert_eq!(format_value(&v, ValueFormat::Currency, 2), "$1,234.50");
///
/// let v = CellValue::Number(0.0735);
/// assert_eq!(format_value(&v, ValueFormat::Percent, 2), "7.35%");
/// ```
pub fn format_value(value: &CellValue, format: ValueFormat, decimals: u32) -> String {
    match format {
        ValueFormat::Text => value.to_string(),
        ValueFormat::Number => match value.as_number() {
            Some(n) => group_thousands(n, decimals),
            None => value.to_string(),
        },
        ValueFormat::Currency => match value.as_number() {
            Some(n) => format!("${}", group_thousands(n, decimals)),
            None => value.to_string(),
        },
        ValueFormat::Percent => match value.as_number() {
            Some(n) => format!("{:.*}%", decimals as usize, n * 100.0),
            None => value.to_string(),
        },
        ValueFormat::Date => match value {
            CellValue::Date(d) => format!("{}/{}/{:02}", d.month(), d.day(), d.year() % 100),
            other => other.to_string(),
        },
    }
}

/// Fix a number to `decimals` places and insert thousands separators
fn group_thousands(n: f64, decimals: u32) -> String {
    let fixed = format!("{:.*}", decimals as usize, n);
    let (sign, rest) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    let digits = int_part.len();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
