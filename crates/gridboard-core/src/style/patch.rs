//! Partial style overlays

use super::{Color, FillStyle, HorizontalAlignment, NumberFormat, Style, VerticalAlignment};

/// A partial style: only the properties that are `Some` are applied.
///
/// Patches let decoration passes layer onto each other without clobbering
/// properties set by an earlier pass. Applying a patch to a cell reads the
/// cell's current style, overlays the set properties, and writes the result
/// back.
///
/// # Example
///
/// ```rust
/// use gridboard_core::{Style, StylePatch, Color};
///
/// let mut style = Style::new().bold(true);
/// let patch = StylePatch::new().italic(true).font_color(Color::RED);
/// patch.apply_to(&mut style);
///
/// assert!(style.font.bold);
/// assert!(style.font.italic);
/// assert_eq!(style.font.color, Color::RED);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StylePatch {
    /// Font family name
    pub font_name: Option<String>,
    /// Font size in points
    pub font_size: Option<f64>,
    /// Bold
    pub bold: Option<bool>,
    /// Italic
    pub italic: Option<bool>,
    /// Font color
    pub font_color: Option<Color>,
    /// Background fill
    pub fill: Option<FillStyle>,
    /// Horizontal alignment
    pub horizontal: Option<HorizontalAlignment>,
    /// Vertical alignment
    pub vertical: Option<VerticalAlignment>,
    /// Wrap text
    pub wrap_text: Option<bool>,
    /// Number format
    pub number_format: Option<NumberFormat>,
}

impl StylePatch {
    /// Create an empty patch (applies nothing)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font name
    pub fn font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font_name = Some(name.into());
        self
    }

    /// Set font size in points
    pub fn font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Set bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Set italic
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    /// Set font color
    pub fn font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    /// Set a solid background fill
    pub fn fill_color(mut self, color: Color) -> Self {
        self.fill = Some(FillStyle::solid(color));
        self
    }

    /// Set horizontal alignment
    pub fn horizontal(mut self, align: HorizontalAlignment) -> Self {
        self.horizontal = Some(align);
        self
    }

    /// Set vertical alignment
    pub fn vertical(mut self, align: VerticalAlignment) -> Self {
        self.vertical = Some(align);
        self
    }

    /// Set wrap text
    pub fn wrap_text(mut self, wrap: bool) -> Self {
        self.wrap_text = Some(wrap);
        self
    }

    /// Set number format
    pub fn number_format(mut self, format: NumberFormat) -> Self {
        self.number_format = Some(format);
        self
    }

    /// Check if the patch sets nothing
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Overlay this patch onto a style
    pub fn apply_to(&self, style: &mut Style) {
        if let Some(name) = &self.font_name {
            style.font.name = name.clone();
        }
        if let Some(size) = self.font_size {
            style.font.size = size;
        }
        if let Some(bold) = self.bold {
            style.font.bold = bold;
        }
        if let Some(italic) = self.italic {
            style.font.italic = italic;
        }
        if let Some(color) = self.font_color {
            style.font.color = color;
        }
        if let Some(fill) = self.fill {
            style.fill = fill;
        }
        if let Some(align) = self.horizontal {
            style.alignment.horizontal = align;
        }
        if let Some(align) = self.vertical {
            style.alignment.vertical = align;
        }
        if let Some(wrap) = self.wrap_text {
            style.alignment.wrap_text = wrap;
        }
        if let Some(format) = &self.number_format {
            style.number_format = format.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch_changes_nothing() {
        let original = Style::new().bold(true).fill_color(Color::RED);
        let mut style = original.clone();

        StylePatch::new().apply_to(&mut style);
        assert_eq!(style, original);
        assert!(StylePatch::new().is_empty());
    }

    #[test]
    fn test_patch_preserves_unset_properties() {
        let mut style = Style::new().bold(true).fill_color(Color::RED);

        StylePatch::new().italic(true).apply_to(&mut style);

        assert!(style.font.bold, "bold must survive an unrelated patch");
        assert!(style.font.italic);
        assert_eq!(style.fill, FillStyle::solid(Color::RED));
    }

    #[test]
    fn test_patch_overwrites_set_properties() {
        let mut style = Style::new().fill_color(Color::RED);

        StylePatch::new()
            .fill_color(Color::BLUE)
            .number_format(NumberFormat::currency(2))
            .apply_to(&mut style);

        assert_eq!(style.fill, FillStyle::solid(Color::BLUE));
        assert_eq!(style.number_format.format_string(), "$#,##0.00");
    }
}
