//! Project index: structural lookup of named resources.

use crate::layers::Layer;
use crate::text::TextStyle;
use crate::types::Color;

/// Lookup of named project resources by value.
///
/// Implementations compare with value equality (`PartialEq` on [`Color`]
/// and [`TextStyle`]), never by name, and only return named entries.
pub trait ProjectIndex {
    /// Named project color whose RGBA equals `color`.
    fn find_color_equal(&self, color: &Color) -> Option<&Color>;

    /// Named project text style whose attributes equal `style`.
    fn find_text_style_equal(&self, style: &TextStyle) -> Option<&TextStyle>;
}

/// An in-memory project snapshot.
///
/// When several entries are value-equal, lookups return the first one in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Project {
    pub colors: Vec<Color>,
    pub text_styles: Vec<TextStyle>,
    pub layers: Vec<Layer>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_color(&mut self, color: Color) {
        self.colors.push(color);
    }

    pub fn add_text_style(&mut self, style: TextStyle) {
        self.text_styles.push(style);
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.add_color(color);
        self
    }

    pub fn with_text_style(mut self, style: TextStyle) -> Self {
        self.add_text_style(style);
        self
    }
}

impl ProjectIndex for Project {
    fn find_color_equal(&self, color: &Color) -> Option<&Color> {
        self.colors
            .iter()
            .find(|candidate| candidate.name.is_some() && *candidate == color)
    }

    fn find_text_style_equal(&self, style: &TextStyle) -> Option<&TextStyle> {
        self.text_styles
            .iter()
            .find(|candidate| !candidate.name.is_empty() && *candidate == style)
    }
}

impl<T: ProjectIndex + ?Sized> ProjectIndex for &T {
    fn find_color_equal(&self, color: &Color) -> Option<&Color> {
        (**self).find_color_equal(color)
    }

    fn find_text_style_equal(&self, style: &TextStyle) -> Option<&TextStyle> {
        (**self).find_text_style_equal(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_color_by_value() {
        let project = Project::new()
            .with_color(Color::rgb(255, 0, 0).named("Danger"))
            .with_color(Color::rgb(0, 0, 255).named("Info"));

        let found = project.find_color_equal(&Color::rgb(0, 0, 255).named("Whatever"));
        assert_eq!(found.and_then(|c| c.name.as_deref()), Some("Info"));
        assert!(project.find_color_equal(&Color::rgb(1, 2, 3)).is_none());
    }

    #[test]
    fn test_find_color_skips_unnamed() {
        let project = Project::new()
            .with_color(Color::rgb(10, 10, 10))
            .with_color(Color::rgb(10, 10, 10).named("Ink"));
        let found = project.find_color_equal(&Color::rgb(10, 10, 10));
        assert_eq!(found.and_then(|c| c.name.as_deref()), Some("Ink"));
    }

    #[test]
    fn test_first_equal_entry_wins() {
        let project = Project::new()
            .with_color(Color::WHITE.named("Paper"))
            .with_color(Color::WHITE.named("Snow"));
        let found = project.find_color_equal(&Color::WHITE);
        assert_eq!(found.and_then(|c| c.name.as_deref()), Some("Paper"));
    }

    #[test]
    fn test_find_text_style() {
        let body = TextStyle::new("Segoe UI", 14.0).named("Body");
        let project = Project::new().with_text_style(body);
        let query = TextStyle::new("Segoe UI", 14.0);
        assert_eq!(
            project.find_text_style_equal(&query).map(|s| s.name.as_str()),
            Some("Body")
        );
        assert!(project
            .find_text_style_equal(&query.with_weight(700))
            .is_none());
    }
}
