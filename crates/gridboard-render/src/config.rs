//! Render configuration

use gridboard_core::Color;

/// Colors used by the decoration passes
///
/// Every color can be overridden; the defaults are a conventional
/// blue-header report scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Title band background
    pub title_fill: Color,
    /// Title band text
    pub title_text: Color,
    /// Header row background
    pub header_fill: Color,
    /// Header row text
    pub header_text: Color,
    /// Zebra band background (odd data rows)
    pub zebra_fill: Color,
    /// Summary row background
    pub summary_fill: Color,
    /// Summary row text
    pub summary_text: Color,
    /// Font color for positive values in signal columns
    pub gain_text: Color,
    /// Font color for negative values in signal columns
    pub loss_text: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            title_fill: Color::rgb(0x2F, 0x54, 0x96),
            title_text: Color::WHITE,
            header_fill: Color::rgb(0x44, 0x72, 0xC4),
            header_text: Color::WHITE,
            zebra_fill: Color::rgb(0xD9, 0xE1, 0xF2),
            summary_fill: Color::rgb(0xF2, 0xF2, 0xF2),
            summary_text: Color::rgb(0x59, 0x59, 0x59),
            gain_text: Color::rgb(0x10, 0x7C, 0x41),
            loss_text: Color::rgb(0xC0, 0x00, 0x00),
        }
    }
}

/// Tunable rendering defaults
///
/// A config is attached to a table at build time; tables that never touch
/// it get the defaults below.
///
/// # Example
///
/// ```rust
/// use gridboard_render::RenderConfig;
///
/// let config = RenderConfig::new().summary_label("Totals");
/// assert_eq!(config.summary_label, "Totals");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Decoration colors
    pub palette: Palette,
    /// Label written into the first cell of the summary row
    pub summary_label: String,
    /// Extra width (in characters) added when auto-fitting columns
    pub column_padding: f64,
    /// Font size of the title band
    pub title_font_size: f64,
    /// Font size of the description row
    pub description_font_size: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            summary_label: "Summary".to_string(),
            column_padding: 2.0,
            title_font_size: 12.0,
            description_font_size: 9.0,
        }
    }
}

impl RenderConfig {
    /// Create a config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the palette
    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the summary row label
    pub fn summary_label<S: Into<String>>(mut self, label: S) -> Self {
        self.summary_label = label.into();
        self
    }

    /// Set the auto-fit column padding
    pub fn column_padding(mut self, padding: f64) -> Self {
        self.column_padding = padding;
        self
    }
}
