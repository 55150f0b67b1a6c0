//! Resolution of values to shared resources.
//!
//! A color or text style resolves to a resource reference when the project
//! holds a named entry with the same value; otherwise it stays literal.
//! The queried value's own name plays no part in the decision.

use xamlkit_core::{Color, ProjectIndex, TextStyle};

use crate::keys::normalize_key;
use crate::options::GeneratorOptions;
use crate::templates::static_resource;
use crate::units::hex_color;

/// Suffix appended to a color key to name its brush.
pub const BRUSH_SUFFIX: &str = "Brush";

/// Outcome of resolving a text style.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleResolution<'s> {
    /// An equal named style exists; refer to it by key.
    Reference(String),
    /// No equal named style; emit the attributes of this style inline.
    Inline(&'s TextStyle),
}

/// Resolves values against a project index.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    project: &'a dyn ProjectIndex,
    options: &'a GeneratorOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(project: &'a dyn ProjectIndex, options: &'a GeneratorOptions) -> Self {
        Self { project, options }
    }

    pub fn options(&self) -> &'a GeneratorOptions {
        self.options
    }

    /// Resource key for a design name.
    pub fn key(&self, name: &str) -> String {
        normalize_key(name, self.options.duplicate_suffix())
    }

    /// Key of the named project color equal to `color`.
    pub fn color_key(&self, color: &Color) -> Option<String> {
        let found = self.project.find_color_equal(color)?;
        let name = found.name.as_deref()?;
        tracing::trace!(name, "color resolved to project resource");
        Some(self.key(name))
    }

    /// `{StaticResource <key>}` for a project color, else `#AARRGGBB`.
    pub fn color(&self, color: &Color) -> String {
        match self.color_key(color) {
            Some(key) => static_resource(&key),
            None => hex_color(color),
        }
    }

    /// `{StaticResource <key>Brush}` for a project color, else `#AARRGGBB`.
    pub fn brush(&self, color: &Color) -> String {
        match self.color_key(color) {
            Some(key) => static_resource(&format!("{}{}", key, BRUSH_SUFFIX)),
            None => hex_color(color),
        }
    }

    /// Reference to an equal named project style, or the style itself.
    pub fn text_style<'s>(&self, style: &'s TextStyle) -> StyleResolution<'s> {
        match self.project.find_text_style_equal(style) {
            Some(found) => {
                tracing::trace!(name = %found.name, "text style resolved to project resource");
                StyleResolution::Reference(self.key(&found.name))
            }
            None => StyleResolution::Inline(style),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use xamlkit_core::Project;

    fn project() -> Project {
        Project::new()
            .with_color(Color::rgb(0, 120, 215).named("Accent"))
            .with_color(Color::rgb(16, 16, 16).named("Ink_dup"))
            .with_text_style(TextStyle::new("Segoe UI", 14.0).named("Body Text"))
    }

    #[test]
    fn test_brush_reference_ignores_input_name() {
        let project = project();
        let options = GeneratorOptions::default();
        let resolver = Resolver::new(&project, &options);

        let input = Color::rgb(0, 120, 215).named("Something Else");
        assert_eq!(resolver.brush(&input), "{StaticResource AccentBrush}");
        assert_eq!(resolver.color(&input), "{StaticResource Accent}");
    }

    #[test]
    fn test_unmatched_color_is_literal() {
        let project = project();
        let options = GeneratorOptions::default();
        let resolver = Resolver::new(&project, &options);

        // named, but not a project color
        let input = Color::rgba(255, 0, 0, 0.5).named("Accent");
        assert_eq!(resolver.brush(&input), "#80FF0000");
    }

    #[test]
    fn test_reference_uses_normalized_key() {
        let project = project();
        let options = GeneratorOptions {
            duplicate_suffix: Some("_dup".to_string()),
            ..GeneratorOptions::default()
        };
        let resolver = Resolver::new(&project, &options);

        assert_eq!(resolver.color(&Color::rgb(16, 16, 16)), "{StaticResource Ink}");
        assert_eq!(
            resolver.text_style(&TextStyle::new("Segoe UI", 14.0)),
            StyleResolution::Reference("BodyText".to_string())
        );
    }

    #[test]
    fn test_unmatched_style_is_inline() {
        let project = project();
        let options = GeneratorOptions::default();
        let resolver = Resolver::new(&project, &options);

        let style = TextStyle::new("Segoe UI", 14.0).with_weight(700).named("Body Text");
        assert_eq!(resolver.text_style(&style), StyleResolution::Inline(&style));
    }

    proptest! {
        #[test]
        fn resolution_ignores_input_name(name in "[A-Za-z ]{0,12}") {
            let project = project();
            let options = GeneratorOptions::default();
            let resolver = Resolver::new(&project, &options);
            let input = Color::rgb(0, 120, 215).named(name);
            prop_assert_eq!(resolver.brush(&input), "{StaticResource AccentBrush}");
        }
    }
}
