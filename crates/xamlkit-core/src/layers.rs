//! Layer model.
//!
//! Layers form a closed set: a layer is either text or a shape, and a
//! shape's fills are either flat colors or gradients. Generators match on
//! these exhaustively.

use crate::text::{TextRun, TextStyle};
use crate::types::{Color, Gradient, Rect};

/// A design layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Layer {
    Text(TextLayer),
    Shape(ShapeLayer),
}

impl Layer {
    pub fn name(&self) -> &str {
        match self {
            Layer::Text(text) => &text.name,
            Layer::Shape(shape) => &shape.name,
        }
    }

    pub fn rect(&self) -> Rect {
        match self {
            Layer::Text(text) => text.rect,
            Layer::Shape(shape) => shape.rect,
        }
    }
}

/// A text layer: content plus styled runs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextLayer {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rect: Rect,
    pub content: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub runs: Vec<TextRun>,
}

impl TextLayer {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rect: Rect::default(),
            content: content.into(),
            runs: Vec::new(),
        }
    }

    /// Append a run covering the whole content.
    pub fn with_style(mut self, style: TextStyle) -> Self {
        let length = self.content.chars().count();
        self.runs.push(TextRun {
            range: crate::text::TextRange { location: 0, length },
            style,
        });
        self
    }

    /// Style of the first run, if any.
    pub fn primary_style(&self) -> Option<&TextStyle> {
        self.runs.first().map(|run| &run.style)
    }
}

/// A single fill of a shape layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Fill {
    Solid { color: Color },
    Gradient { gradient: Gradient },
}

/// A vector shape layer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShapeLayer {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rect: Rect,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fills: Vec<Fill>,
    /// Marked for asset export; rendered as an image instead of a brush.
    #[cfg_attr(feature = "serde", serde(default))]
    pub exportable: bool,
}

impl ShapeLayer {
    pub fn new(name: impl Into<String>, rect: Rect) -> Self {
        Self {
            name: name.into(),
            rect,
            fills: Vec::new(),
            exportable: false,
        }
    }

    pub fn with_fill(mut self, fill: Fill) -> Self {
        self.fills.push(fill);
        self
    }

    pub fn exportable(mut self) -> Self {
        self.exportable = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LinearGradient;

    #[test]
    fn test_primary_style_is_first_run() {
        let layer = TextLayer::new("Title", "Hello")
            .with_style(TextStyle::new("Segoe UI", 24.0))
            .with_style(TextStyle::new("Consolas", 12.0));
        assert_eq!(layer.runs[0].range.length, 5);
        assert_eq!(
            layer.primary_style().map(|s| s.font_family.as_str()),
            Some("Segoe UI")
        );
    }

    #[test]
    fn test_layer_accessors() {
        let shape = ShapeLayer::new("Banner", Rect::new(0.0, 0.0, 320.0, 80.0)).with_fill(
            Fill::Gradient {
                gradient: Gradient::Linear(LinearGradient::horizontal(vec![])),
            },
        );
        let layer = Layer::Shape(shape);
        assert_eq!(layer.name(), "Banner");
        assert_eq!(layer.rect().width, 320.0);
    }
}
