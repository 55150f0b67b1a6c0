//! Host-facing entry points.
//!
//! Each method corresponds to one host command. They are thin: process the
//! input collection, build views, render a template.

use xamlkit_core::{Color, Fill, Gradient, Layer, ProjectIndex, ShapeLayer, TextStyle};

use crate::collection::CollectionPipeline;
use crate::document::{
    resource_dictionary, Code, ExportedFile, COLORS_FILENAME, TEXT_STYLES_FILENAME,
};
use crate::error::Result;
use crate::options::{GeneratorOptions, OptionSource};
use crate::resolver::Resolver;
use crate::templates::TemplateEngine;
use crate::views::ViewBuilder;

/// Per-invocation inputs: the project to resolve against and validated
/// options.
pub struct Context<'a> {
    pub project: &'a dyn ProjectIndex,
    pub options: GeneratorOptions,
}

impl<'a> Context<'a> {
    pub fn new(project: &'a dyn ProjectIndex, options: GeneratorOptions) -> Self {
        Self { project, options }
    }

    /// Validate host options once and bind them to `project`.
    pub fn from_source(project: &'a dyn ProjectIndex, source: &dyn OptionSource) -> Result<Self> {
        Ok(Self::new(project, GeneratorOptions::from_source(source)?))
    }

    fn views(&self) -> ViewBuilder<'_> {
        ViewBuilder::new(Resolver::new(self.project, &self.options))
    }

    fn pipeline(&self) -> CollectionPipeline<'_> {
        let options = &self.options;
        CollectionPipeline::new()
            .sorted(options.sort_resources)
            .excluding(options.duplicate_suffix().filter(|_| options.exclude_duplicates))
    }
}

/// XAML generator exposing the host commands.
pub struct XamlExtension<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> XamlExtension<'a> {
    /// Create an extension with the built-in templates.
    pub fn new() -> Result<Self> {
        Ok(Self {
            engine: TemplateEngine::xaml()?,
        })
    }

    /// Wrap `text` in a XAML comment.
    pub fn comment(&self, _ctx: &Context<'_>, text: &str) -> String {
        // "--" may not appear inside an XML comment
        let mut body = text.to_string();
        while body.contains("--") {
            body = body.replace("--", "- -");
        }
        format!("<!-- {} -->", body)
    }

    /// Color and brush resources for the styleguide colors.
    pub fn styleguide_colors(&self, ctx: &Context<'_>, colors: &[Color]) -> Result<Code> {
        let colors = ctx
            .pipeline()
            .filtered(ctx.options.colors_filter.as_ref())
            .apply(colors);
        tracing::debug!(count = colors.len(), "generating color resources");

        let view = ctx.views().colors_view(&colors)?;
        self.render("colors", &view)
    }

    /// Style resources for the styleguide text styles.
    pub fn styleguide_text_styles(
        &self,
        ctx: &Context<'_>,
        text_styles: &[TextStyle],
    ) -> Result<Code> {
        let text_styles = ctx
            .pipeline()
            .filtered(ctx.options.text_styles_filter.as_ref())
            .apply(text_styles);
        tracing::debug!(count = text_styles.len(), "generating text style resources");

        let view = ctx.views().text_styles_view(&text_styles)?;
        self.render("text_styles", &view)
    }

    /// `Colors.xaml` resource dictionary.
    pub fn export_styleguide_colors(
        &self,
        ctx: &Context<'_>,
        colors: &[Color],
    ) -> Result<ExportedFile> {
        let fragment = self.styleguide_colors(ctx, colors)?;
        resource_dictionary(&self.engine, &fragment, COLORS_FILENAME)
    }

    /// `TextBlock.xaml` resource dictionary.
    pub fn export_styleguide_text_styles(
        &self,
        ctx: &Context<'_>,
        text_styles: &[TextStyle],
    ) -> Result<ExportedFile> {
        let fragment = self.styleguide_text_styles(ctx, text_styles)?;
        resource_dictionary(&self.engine, &fragment, TEXT_STYLES_FILENAME)
    }

    /// Markup for a single layer, or `None` when the layer has no mapping.
    pub fn layer(&self, ctx: &Context<'_>, layer: &Layer) -> Result<Option<Code>> {
        let views = ctx.views();
        match layer {
            Layer::Text(text) => match views.text_block_view(text) {
                Some(view) => self.render("text_block", &view).map(Some),
                None => {
                    tracing::debug!(layer = %text.name, "text layer has no styled runs");
                    Ok(None)
                }
            },
            Layer::Shape(shape) if shape.exportable => {
                self.render("image", &views.image_view(shape)).map(Some)
            }
            Layer::Shape(shape) => match primary_fill(shape) {
                Some(Fill::Gradient {
                    gradient: Gradient::Linear(linear),
                }) => self
                    .render("linear_gradient", &views.gradient_view(linear))
                    .map(Some),
                Some(Fill::Gradient { .. }) | Some(Fill::Solid { .. }) | None => {
                    tracing::debug!(layer = %shape.name, "no mapping for shape fill");
                    Ok(None)
                }
            },
        }
    }

    fn render<T: serde::Serialize>(&self, template: &str, view: &T) -> Result<Code> {
        let code = self.engine.render(template, view)?;
        Ok(Code::xml(code.trim_end()))
    }
}

/// The fill a shape is exported by: its first one.
fn primary_fill(shape: &ShapeLayer) -> Option<&Fill> {
    shape.fills.first()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodegenError;
    use serde_json::json;
    use xamlkit_core::{
        FontStyle, GradientStop, LinearGradient, Project, Rect, TextAlign, TextLayer,
    };

    fn options(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn sample_project() -> Project {
        Project::new()
            .with_color(Color::rgb(0, 120, 215).named("Accent"))
            .with_color(Color::rgb(0, 120, 215).named("Accent_dup"))
            .with_color(Color::rgb(255, 255, 255).named("Background"))
            .with_text_style(
                TextStyle::new("Segoe UI", 14.0)
                    .named("Body")
                    .with_color(Color::rgb(0, 120, 215)),
            )
    }

    #[test]
    fn test_comment() {
        let project = Project::new();
        let ctx = Context::new(&project, GeneratorOptions::default());
        let ext = XamlExtension::new().unwrap();
        assert_eq!(ext.comment(&ctx, "Header"), "<!-- Header -->");
        assert_eq!(ext.comment(&ctx, "a -- b"), "<!-- a - - b -->");
        assert_eq!(ext.comment(&ctx, "---"), "<!-- - - - -->");
    }

    #[test]
    fn test_styleguide_colors() {
        let project = sample_project();
        let ctx = Context::from_source(&project, &options(json!({ "duplicateSuffix": "_dup" })))
            .unwrap();
        let ext = XamlExtension::new().unwrap();

        let code = ext.styleguide_colors(&ctx, &project.colors).unwrap();
        assert_eq!(code.language.as_str(), "xml");
        assert!(code.code.contains("<Color x:Key=\"Accent\">#FF0078D7</Color>"));
        assert!(code
            .code
            .contains("<SolidColorBrush x:Key=\"AccentBrush\" Color=\"{StaticResource Accent}\" />"));
        assert!(code.code.contains("<Color x:Key=\"Background\">#FFFFFFFF</Color>"));
        assert!(!code.code.contains("Accent_dup"));
    }

    #[test]
    fn test_styleguide_colors_collision_without_exclusion() {
        let project = sample_project();
        let ctx = Context::from_source(
            &project,
            &options(json!({ "duplicateSuffix": "_dup", "excludeDuplicates": false })),
        )
        .unwrap();
        let ext = XamlExtension::new().unwrap();

        let err = ext.styleguide_colors(&ctx, &project.colors).unwrap_err();
        assert!(matches!(err, CodegenError::DuplicateResourceKey { .. }));
    }

    #[test]
    fn test_spaced_duplicate_suffix_is_excluded() {
        let project = Project::new()
            .with_color(Color::rgb(0, 120, 215).named("Accent"))
            .with_color(Color::rgb(0, 120, 215).named("Accent_ dup"));
        let ctx = Context::from_source(&project, &options(json!({ "duplicateSuffix": "_dup" })))
            .unwrap();
        let ext = XamlExtension::new().unwrap();

        let code = ext.styleguide_colors(&ctx, &project.colors).unwrap();
        assert_eq!(code.code.matches("<Color x:Key=\"Accent\">").count(), 1);
    }

    #[test]
    fn test_invalid_filter_surfaces() {
        let project = Project::new();
        let result = Context::from_source(&project, &options(json!({ "colorsFilter": "[" })));
        assert!(matches!(result, Err(CodegenError::InvalidFilter { .. })));
    }

    #[test]
    fn test_styleguide_text_styles() {
        let project = sample_project();
        let ctx = Context::new(&project, GeneratorOptions::default());
        let ext = XamlExtension::new().unwrap();

        let styles = vec![TextStyle::new("Segoe UI", 28.5)
            .named("Heading Large")
            .with_weight(600)
            .with_letter_spacing(-6.0)
            .with_font_style(FontStyle::Italic)
            .with_align(TextAlign::Center)
            .with_color(Color::rgb(0, 120, 215))];

        let code = ext.styleguide_text_styles(&ctx, &styles).unwrap();
        let xaml = &code.code;
        assert!(xaml.contains("<Style x:Key=\"HeadingLarge\" TargetType=\"TextBlock\">"));
        assert!(xaml.contains("<Setter Property=\"Foreground\" Value=\"{StaticResource AccentBrush}\" />"));
        assert!(xaml.contains("<Setter Property=\"FontFamily\" Value=\"Segoe UI\" />"));
        assert!(xaml.contains("<Setter Property=\"FontSize\" Value=\"28.5\" />"));
        assert!(xaml.contains("<Setter Property=\"CharacterSpacing\" Value=\"-500\" />"));
        assert!(xaml.contains("<Setter Property=\"FontStyle\" Value=\"Italic\" />"));
        assert!(xaml.contains("<Setter Property=\"FontWeight\" Value=\"SemiBold\" />"));
        assert!(xaml.contains("<Setter Property=\"TextAlignment\" Value=\"Center\" />"));
        assert!(!xaml.contains("LineHeight"));
        assert!(!xaml.contains("TextTrimming"));
        assert!(xaml.trim_end().ends_with("</Style>"));
    }

    #[test]
    fn test_export_files() {
        let project = sample_project();
        let ctx = Context::new(&project, GeneratorOptions::default());
        let ext = XamlExtension::new().unwrap();

        let colors = ext
            .export_styleguide_colors(&ctx, &[Color::WHITE.named("Paper")])
            .unwrap();
        assert_eq!(colors.filename, "Colors.xaml");
        assert!(colors.code.contains("    <Color x:Key=\"Paper\">#FFFFFFFF</Color>"));

        let styles = ext
            .export_styleguide_text_styles(&ctx, &project.text_styles)
            .unwrap();
        assert_eq!(styles.filename, "TextBlock.xaml");
        assert!(styles.code.contains("    <Style x:Key=\"Body\" TargetType=\"TextBlock\">"));
        assert!(styles.code.contains("</ResourceDictionary>"));
    }

    #[test]
    fn test_layer_text_block_reference() {
        let project = sample_project();
        let ctx = Context::new(&project, GeneratorOptions::default());
        let ext = XamlExtension::new().unwrap();

        let style = TextStyle::new("Segoe UI", 14.0).with_color(Color::rgb(0, 120, 215));
        let layer = Layer::Text(TextLayer::new("Greeting", "Hi & welcome").with_style(style));
        let code = ext.layer(&ctx, &layer).unwrap().unwrap();
        assert!(code.code.starts_with("<TextBlock"));
        assert!(code.code.contains("Style=\"{StaticResource Body}\""));
        assert!(code.code.contains("Text=\"Hi &amp; welcome\" />"));
        assert!(!code.code.contains("FontSize"));
    }

    #[test]
    fn test_layer_gradient() {
        let project = sample_project();
        let ctx = Context::new(&project, GeneratorOptions::default());
        let ext = XamlExtension::new().unwrap();

        let gradient = LinearGradient {
            start_point: xamlkit_core::Point::new(0.5, 0.0),
            end_point: xamlkit_core::Point::new(0.5, 1.0),
            stops: vec![
                GradientStop::new(0.0, Color::rgb(255, 0, 0)),
                GradientStop::new(1.0, Color::rgb(0, 120, 215)),
            ],
        };
        let shape = ShapeLayer::new("Banner", Rect::new(0.0, 0.0, 100.0, 20.0)).with_fill(
            Fill::Gradient {
                gradient: Gradient::Linear(gradient),
            },
        );
        let code = ext.layer(&ctx, &Layer::Shape(shape)).unwrap().unwrap();
        assert!(code
            .code
            .starts_with("<LinearGradientBrush StartPoint=\"0.5,0\" EndPoint=\"0.5,1\">"));
        assert!(code
            .code
            .contains("<GradientStop Color=\"#FFFF0000\" Offset=\"0\" />"));
        assert!(code
            .code
            .contains("<GradientStop Color=\"{StaticResource Accent}\" Offset=\"1\" />"));
    }

    #[test]
    fn test_layer_image() {
        let project = Project::new();
        let ctx = Context::new(&project, GeneratorOptions::default());
        let ext = XamlExtension::new().unwrap();

        let shape = ShapeLayer::new("hero", Rect::new(0.0, 0.0, 320.0, 180.0))
            .with_fill(Fill::Solid { color: Color::BLACK })
            .exportable();
        let code = ext.layer(&ctx, &Layer::Shape(shape)).unwrap().unwrap();
        assert_eq!(
            code.code,
            "<Image Source=\"ms-appx:///Assets/hero.png\" Width=\"320\" Height=\"180\" />"
        );
    }

    #[test]
    fn test_layer_without_mapping() {
        let project = Project::new();
        let ctx = Context::new(&project, GeneratorOptions::default());
        let ext = XamlExtension::new().unwrap();

        let solid = ShapeLayer::new("Box", Rect::default()).with_fill(Fill::Solid { color: Color::BLACK });
        assert!(ext.layer(&ctx, &Layer::Shape(solid)).unwrap().is_none());

        let radial = ShapeLayer::new("Glow", Rect::default()).with_fill(Fill::Gradient {
            gradient: Gradient::Radial { stops: vec![] },
        });
        assert!(ext.layer(&ctx, &Layer::Shape(radial)).unwrap().is_none());

        let empty = ShapeLayer::new("Nothing", Rect::default());
        assert!(ext.layer(&ctx, &Layer::Shape(empty)).unwrap().is_none());

        let text = Layer::Text(TextLayer::new("Blank", ""));
        assert!(ext.layer(&ctx, &text).unwrap().is_none());
    }
}
