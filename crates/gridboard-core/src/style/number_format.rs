//! Number format types

/// Number format for cell display
///
/// Formats carry spreadsheet-style pattern strings (e.g. `#,##0.00`);
/// the grid surface is responsible for interpreting them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NumberFormat {
    /// General format (default)
    #[default]
    General,

    /// Custom format string
    Custom(String),
}

impl NumberFormat {
    /// Create a number format from a format string
    pub fn from_string<S: Into<String>>(format: S) -> Self {
        NumberFormat::Custom(format.into())
    }

    /// Thousands-grouped number with the given decimal places (`#,##0.00`)
    pub fn number(decimals: u32) -> Self {
        NumberFormat::Custom(format!("#,##0{}", decimal_suffix(decimals)))
    }

    /// Dollar currency with the given decimal places (`$#,##0.00`)
    pub fn currency(decimals: u32) -> Self {
        NumberFormat::Custom(format!("$#,##0{}", decimal_suffix(decimals)))
    }

    /// Percentage with the given decimal places (`0.00%`)
    pub fn percent(decimals: u32) -> Self {
        NumberFormat::Custom(format!("0{}%", decimal_suffix(decimals)))
    }

    /// Short date (`m/d/yy`)
    pub fn date() -> Self {
        NumberFormat::Custom("m/d/yy".to_string())
    }

    /// Text format (`@`)
    pub fn text() -> Self {
        NumberFormat::Custom("@".to_string())
    }

    /// Get the format string
    pub fn format_string(&self) -> &str {
        match self {
            NumberFormat::General => "General",
            NumberFormat::Custom(s) => s,
        }
    }
}

fn decimal_suffix(decimals: u32) -> String {
    if decimals == 0 {
        String::new()
    } else {
        format!(".{}", "0".repeat(decimals as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_constructors() {
        assert_eq!(NumberFormat::number(0).format_string(), "#,##0");
        assert_eq!(NumberFormat::number(2).format_string(), "#,##0.00");
        assert_eq!(NumberFormat::currency(2).format_string(), "$#,##0.00");
        assert_eq!(NumberFormat::percent(1).format_string(), "0.0%");
        assert_eq!(NumberFormat::date().format_string(), "m/d/yy");
        assert_eq!(NumberFormat::General.format_string(), "General");
    }
}
