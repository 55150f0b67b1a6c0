//! Text styles and styled runs.

use crate::types::Color;

/// Font posture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TextAlign {
    Left,
    Center,
    Right,
    Justify,
}

/// A text style.
///
/// Equality covers every typographic attribute and the color value, but not
/// the style's own name.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct TextStyle {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    pub font_family: String,
    pub font_size: f64,
    /// Tracking in points.
    #[cfg_attr(feature = "serde", serde(default))]
    pub letter_spacing: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub font_style: FontStyle,
    /// Numeric weight, 100 to 950.
    pub font_weight: u16,
    #[cfg_attr(feature = "serde", serde(default))]
    pub line_height: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub text_align: Option<TextAlign>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub color: Option<Color>,
}

impl TextStyle {
    /// A regular, unnamed style with no color.
    pub fn new(font_family: impl Into<String>, font_size: f64) -> Self {
        Self {
            name: String::new(),
            font_family: font_family.into(),
            font_size,
            letter_spacing: 0.0,
            font_style: FontStyle::Normal,
            font_weight: 400,
            line_height: None,
            text_align: None,
            color: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_weight(mut self, weight: u16) -> Self {
        self.font_weight = weight;
        self
    }

    pub fn with_letter_spacing(mut self, spacing: f64) -> Self {
        self.letter_spacing = spacing;
        self
    }

    pub fn with_font_style(mut self, style: FontStyle) -> Self {
        self.font_style = style;
        self
    }

    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = Some(line_height);
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.text_align = Some(align);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl PartialEq for TextStyle {
    fn eq(&self, other: &Self) -> bool {
        self.font_family == other.font_family
            && self.font_size == other.font_size
            && self.letter_spacing == other.letter_spacing
            && self.font_style == other.font_style
            && self.font_weight == other.font_weight
            && self.line_height == other.line_height
            && self.text_align == other.text_align
            && self.color == other.color
    }
}

/// A character range within a text layer's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRange {
    pub location: usize,
    pub length: usize,
}

/// A styled run of text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextRun {
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: TextRange,
    pub style: TextStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_equality_ignores_name() {
        let body = TextStyle::new("Segoe UI", 14.0).named("Body");
        let other = TextStyle::new("Segoe UI", 14.0).named("Paragraph");
        assert_eq!(body, other);
    }

    #[test]
    fn test_style_equality_ignores_color_name() {
        let a = TextStyle::new("Segoe UI", 14.0).with_color(Color::BLACK.named("Ink"));
        let b = TextStyle::new("Segoe UI", 14.0).with_color(Color::BLACK);
        assert_eq!(a, b);
    }

    #[test]
    fn test_style_equality_covers_attributes() {
        let base = TextStyle::new("Segoe UI", 14.0);
        assert_ne!(base, base.clone().with_weight(700));
        assert_ne!(base, base.clone().with_line_height(20.0));
        assert_ne!(base, base.clone().with_align(TextAlign::Center));
        assert_ne!(base, base.clone().with_color(Color::WHITE));
    }
}
