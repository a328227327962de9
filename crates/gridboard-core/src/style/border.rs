//! Border style types

use super::Color;

/// Border style for a single cell
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct BorderStyle {
    /// Left border
    pub left: Option<BorderEdge>,
    /// Right border
    pub right: Option<BorderEdge>,
    /// Top border
    pub top: Option<BorderEdge>,
    /// Bottom border
    pub bottom: Option<BorderEdge>,
}

impl BorderStyle {
    /// Create a new border style with no borders
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all four borders to the same edge
    pub fn all(edge: BorderEdge) -> Self {
        Self {
            left: Some(edge.clone()),
            right: Some(edge.clone()),
            top: Some(edge.clone()),
            bottom: Some(edge),
        }
    }

    /// Check if all borders are empty
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.top.is_none() && self.bottom.is_none()
    }
}

/// A single border edge
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BorderEdge {
    /// Line style
    pub style: BorderLineStyle,
    /// Line color
    pub color: Color,
}

impl BorderEdge {
    /// Create a new border edge
    pub fn new(style: BorderLineStyle, color: Color) -> Self {
        Self { style, color }
    }

    /// Create a thin black border
    pub fn thin() -> Self {
        Self::new(BorderLineStyle::Thin, Color::BLACK)
    }

    /// Create a medium black border
    pub fn medium() -> Self {
        Self::new(BorderLineStyle::Medium, Color::BLACK)
    }

    /// Create a thick black border
    pub fn thick() -> Self {
        Self::new(BorderLineStyle::Thick, Color::BLACK)
    }

    /// Replace the edge color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Border line styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderLineStyle {
    /// No border
    #[default]
    None,
    /// Thin line
    Thin,
    /// Medium line
    Medium,
    /// Thick line
    Thick,
    /// Dashed line
    Dashed,
    /// Dotted line
    Dotted,
    /// Double line
    Double,
}

/// Border specification for a rectangular region
///
/// Outer edges land on the boundary cells of the region; inner edges land
/// on every interior cell boundary. Edges left as `None` preserve whatever
/// border a cell already has.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeBorder {
    /// Top edge of the region
    pub top: Option<BorderEdge>,
    /// Bottom edge of the region
    pub bottom: Option<BorderEdge>,
    /// Left edge of the region
    pub left: Option<BorderEdge>,
    /// Right edge of the region
    pub right: Option<BorderEdge>,
    /// Horizontal lines between rows inside the region
    pub inner_horizontal: Option<BorderEdge>,
    /// Vertical lines between columns inside the region
    pub inner_vertical: Option<BorderEdge>,
}

impl RangeBorder {
    /// Create a range border with no edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an outline border (all four outer edges, no inner lines)
    pub fn outline(edge: BorderEdge) -> Self {
        Self {
            top: Some(edge.clone()),
            bottom: Some(edge.clone()),
            left: Some(edge.clone()),
            right: Some(edge),
            inner_horizontal: None,
            inner_vertical: None,
        }
    }

    /// Set both inner edges
    pub fn with_inner(mut self, edge: BorderEdge) -> Self {
        self.inner_horizontal = Some(edge.clone());
        self.inner_vertical = Some(edge);
        self
    }

    /// Set only the bottom edge
    pub fn with_bottom(mut self, edge: BorderEdge) -> Self {
        self.bottom = Some(edge);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outline_with_inner() {
        let border = RangeBorder::outline(BorderEdge::medium()).with_inner(BorderEdge::thin());

        assert_eq!(border.top.as_ref().map(|e| e.style), Some(BorderLineStyle::Medium));
        assert_eq!(border.left.as_ref().map(|e| e.style), Some(BorderLineStyle::Medium));
        assert_eq!(
            border.inner_horizontal.as_ref().map(|e| e.style),
            Some(BorderLineStyle::Thin)
        );
        assert_eq!(
            border.inner_vertical.as_ref().map(|e| e.style),
            Some(BorderLineStyle::Thin)
        );
    }

    #[test]
    fn test_border_style_all() {
        let style = BorderStyle::all(BorderEdge::thin());
        assert!(!style.is_empty());
        assert_eq!(style.left, style.right);
        assert_eq!(style.top, style.bottom);
    }
}
