//! View models consumed by the XAML templates.
//!
//! Every optional field is an `Option` that is left out of the serialized
//! view when the corresponding property is disabled or suppressed, so the
//! templates only test for presence.

use serde::Serialize;
use xamlkit_core::{Color, LinearGradient, Point, ShapeLayer, TextLayer, TextStyle};

use crate::error::Result;
use crate::keys::KeyRegistry;
use crate::options::TextAlignmentMode;
use crate::resolver::{Resolver, StyleResolution, BRUSH_SUFFIX};
use crate::templates::static_resource;
use crate::units::{character_spacing, font_style, hex_color, round2, text_alignment, FontWeight};

/// `TextTrimming` value used when ellipsis is enabled.
const CHARACTER_ELLIPSIS: &str = "CharacterEllipsis";

/// A keyed color or brush resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorView {
    pub key: String,
    pub color: String,
}

/// Colors and their matching brushes, in the same order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorsView {
    pub colors: Vec<ColorView>,
    pub brushes: Vec<ColorView>,
}

/// Text properties shared by styles and inline text blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_spacing: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_style: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_alignment: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_trimming: Option<&'static str>,
}

/// A keyed `TextBlock` style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleView {
    pub key: String,
    #[serde(flatten)]
    pub attributes: StyleAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStylesView {
    pub styles: Vec<StyleView>,
}

/// A `TextBlock` either pointing at a shared style or carrying its
/// properties inline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlockView {
    /// Key of the shared style, when the text's style resolved to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    pub text: String,
    #[serde(flatten)]
    pub attributes: StyleAttributes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientStopView {
    pub offset: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientView {
    pub start_point: String,
    pub end_point: String,
    pub stops: Vec<GradientStopView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageView {
    pub source: String,
    pub width: f64,
    pub height: f64,
}

/// Builds views, resolving colors and styles through a [`Resolver`].
#[derive(Clone, Copy)]
pub struct ViewBuilder<'a> {
    resolver: Resolver<'a>,
}

impl<'a> ViewBuilder<'a> {
    pub fn new(resolver: Resolver<'a>) -> Self {
        Self { resolver }
    }

    /// `{key, color: #AARRGGBB}`.
    pub fn color_view(&self, color: &Color) -> ColorView {
        ColorView {
            key: self.resolver.key(color.name.as_deref().unwrap_or("")),
            color: hex_color(color),
        }
    }

    /// `{key: <key>Brush, color: {StaticResource <key>}}`.
    pub fn brush_view(&self, color: &Color) -> ColorView {
        let key = self.resolver.key(color.name.as_deref().unwrap_or(""));
        ColorView {
            key: format!("{}{}", key, BRUSH_SUFFIX),
            color: static_resource(&key),
        }
    }

    /// Color and brush resources for a processed color list.
    ///
    /// Fails if two entries, or an entry and another entry's brush, end up
    /// with the same key.
    pub fn colors_view(&self, colors: &[&Color]) -> Result<ColorsView> {
        let mut registry = KeyRegistry::new();
        let mut view = ColorsView {
            colors: Vec::with_capacity(colors.len()),
            brushes: Vec::with_capacity(colors.len()),
        };

        for color in colors {
            let name = color.name.as_deref().unwrap_or("");
            let color_view = self.color_view(color);
            let brush_view = self.brush_view(color);
            registry.claim(&color_view.key, name)?;
            registry.claim(&brush_view.key, name)?;
            view.colors.push(color_view);
            view.brushes.push(brush_view);
        }

        Ok(view)
    }

    /// Style properties of `style`, subject to the generation toggles.
    pub fn style_attributes(&self, style: &TextStyle) -> StyleAttributes {
        let options = self.resolver.options();
        let generate = &options.generate;

        let is_default_family = options
            .default_font_family
            .as_deref()
            .is_some_and(|family| family == style.font_family);

        StyleAttributes {
            foreground: style
                .color
                .as_ref()
                .filter(|_| generate.foreground)
                .map(|color| self.resolver.brush(color)),
            font_family: (generate.font_family && !options.ignore_font_family && !is_default_family)
                .then(|| style.font_family.clone()),
            font_size: generate.font_size.then(|| round2(style.font_size)),
            character_spacing: (generate.character_spacing && !options.ignore_character_spacing)
                .then(|| character_spacing(style.letter_spacing)),
            font_style: generate.font_style.then(|| font_style(style.font_style)),
            font_weight: generate
                .font_weight
                .then(|| FontWeight::from_numeric(style.font_weight)),
            line_height: style
                .line_height
                .filter(|_| generate.line_height && !options.ignore_line_height)
                .map(round2),
            text_alignment: style
                .text_align
                .filter(|_| {
                    generate.text_alignment
                        && options.text_alignment_mode == TextAlignmentMode::Style
                })
                .map(text_alignment),
            text_trimming: options.add_character_ellipsis.then_some(CHARACTER_ELLIPSIS),
        }
    }

    /// A keyed style built from the style's own values.
    pub fn style_view(&self, style: &TextStyle) -> StyleView {
        StyleView {
            key: self.resolver.key(&style.name),
            attributes: self.style_attributes(style),
        }
    }

    /// Styles for a processed text style list. Fails on key collisions.
    pub fn text_styles_view(&self, styles: &[&TextStyle]) -> Result<TextStylesView> {
        let mut registry = KeyRegistry::new();
        let mut views = Vec::with_capacity(styles.len());
        for style in styles {
            let view = self.style_view(style);
            registry.claim(&view.key, &style.name)?;
            views.push(view);
        }
        Ok(TextStylesView { styles: views })
    }

    /// Text block for a layer, or `None` when the layer has no styled run.
    pub fn text_block_view(&self, layer: &TextLayer) -> Option<TextBlockView> {
        let style = layer.primary_style()?;
        let options = self.resolver.options();

        let (reference, mut attributes) = match self.resolver.text_style(style) {
            StyleResolution::Reference(key) => (Some(key), StyleAttributes::default()),
            StyleResolution::Inline(style) => (None, self.style_attributes(style)),
        };

        if options.text_alignment_mode == TextAlignmentMode::TextBlock
            && options.generate.text_alignment
        {
            attributes.text_alignment = style.text_align.map(text_alignment);
        }

        Some(TextBlockView {
            style: reference,
            text: layer.content.clone(),
            attributes,
        })
    }

    /// Linear gradient brush; stop colors resolve to color resources.
    pub fn gradient_view(&self, gradient: &LinearGradient) -> GradientView {
        GradientView {
            start_point: format_point(gradient.start_point),
            end_point: format_point(gradient.end_point),
            stops: gradient
                .stops
                .iter()
                .map(|stop| GradientStopView {
                    offset: stop.position,
                    color: self.resolver.color(&stop.color),
                })
                .collect(),
        }
    }

    /// Image referencing the layer's exported asset.
    pub fn image_view(&self, layer: &ShapeLayer) -> ImageView {
        let scheme = &self.resolver.options().asset_uri_scheme;
        ImageView {
            source: format!("{}:///Assets/{}.png", scheme, layer.name),
            width: round2(layer.rect.width),
            height: round2(layer.rect.height),
        }
    }
}

/// `"<x>,<y>"` with both coordinates rounded.
fn format_point(point: Point) -> String {
    format!("{},{}", round2(point.x), round2(point.y))
}
