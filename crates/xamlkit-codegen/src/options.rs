//! Generator configuration.
//!
//! The host exposes options as a loose key-value bag. [`GeneratorOptions`]
//! reads every recognized key once, validates it, and falls back to a
//! named default when a key is missing. Unknown keys are ignored.

use std::collections::HashMap;

use regex::Regex;
use serde_json::Value;

use crate::error::{CodegenError, Result};

/// Read-only access to host options.
pub trait OptionSource {
    fn get_option(&self, name: &str) -> Option<Value>;
}

impl OptionSource for serde_json::Map<String, Value> {
    fn get_option(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl OptionSource for HashMap<String, Value> {
    fn get_option(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

/// Where text alignment is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignmentMode {
    /// As a setter on the shared style.
    #[default]
    Style,
    /// As an attribute on each text block.
    TextBlock,
}

impl std::str::FromStr for TextAlignmentMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "style" => Ok(Self::Style),
            "textBlock" => Ok(Self::TextBlock),
            other => Err(format!("expected 'style' or 'textBlock', got '{}'", other)),
        }
    }
}

/// Validated generator options.
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Sort colors and text styles by name.
    pub sort_resources: bool,
    /// Keep only colors whose name matches.
    pub colors_filter: Option<Regex>,
    /// Keep only text styles whose name matches.
    pub text_styles_filter: Option<Regex>,
    /// Name suffix marking intentional duplicates.
    pub duplicate_suffix: Option<String>,
    /// Drop entries carrying the duplicate suffix from styleguides.
    pub exclude_duplicates: bool,
    /// Font family inherited from the app; never emitted explicitly.
    pub default_font_family: Option<String>,
    pub ignore_character_spacing: bool,
    pub ignore_font_family: bool,
    pub ignore_line_height: bool,
    pub text_alignment_mode: TextAlignmentMode,
    /// Emit `TextTrimming="CharacterEllipsis"`.
    pub add_character_ellipsis: bool,
    /// Scheme for image sources, e.g. `ms-appx`.
    pub asset_uri_scheme: String,
    pub generate: GenerateToggles,
}

/// Per-property emission switches for style views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateToggles {
    pub foreground: bool,
    pub font_family: bool,
    pub font_size: bool,
    pub character_spacing: bool,
    pub font_style: bool,
    pub font_weight: bool,
    pub text_alignment: bool,
    pub line_height: bool,
}

impl Default for GenerateToggles {
    fn default() -> Self {
        Self {
            foreground: true,
            font_family: true,
            font_size: true,
            character_spacing: true,
            font_style: true,
            font_weight: true,
            text_alignment: true,
            line_height: true,
        }
    }
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            sort_resources: true,
            colors_filter: None,
            text_styles_filter: None,
            duplicate_suffix: None,
            exclude_duplicates: true,
            default_font_family: None,
            ignore_character_spacing: false,
            ignore_font_family: false,
            ignore_line_height: false,
            text_alignment_mode: TextAlignmentMode::Style,
            add_character_ellipsis: false,
            asset_uri_scheme: "ms-appx".to_string(),
            generate: GenerateToggles::default(),
        }
    }
}

impl GeneratorOptions {
    /// Read and validate every recognized option.
    pub fn from_source(source: &dyn OptionSource) -> Result<Self> {
        let defaults = Self::default();
        let reader = Reader { source };

        let sort_resources = match reader.bool("sortResources")? {
            Some(sort) => sort,
            None => reader
                .bool("sortColors")?
                .or(reader.bool("sortTextStyles")?)
                .unwrap_or(defaults.sort_resources),
        };

        let text_alignment_mode = match reader.string("textAlignmentMode")? {
            Some(mode) => mode
                .parse::<TextAlignmentMode>()
                .map_err(|message| CodegenError::InvalidOption {
                    option: "textAlignmentMode",
                    message,
                })?,
            None => defaults.text_alignment_mode,
        };

        let toggles = GenerateToggles::default();
        let generate = GenerateToggles {
            foreground: reader.bool_or("generateForeground", toggles.foreground)?,
            font_family: reader.bool_or("generateFontFamily", toggles.font_family)?,
            font_size: reader.bool_or("generateFontSize", toggles.font_size)?,
            character_spacing: reader
                .bool_or("generateCharacterSpacing", toggles.character_spacing)?,
            font_style: reader.bool_or("generateFontStyle", toggles.font_style)?,
            font_weight: reader.bool_or("generateFontWeight", toggles.font_weight)?,
            text_alignment: reader.bool_or("generateTextAlignment", toggles.text_alignment)?,
            line_height: reader.bool_or("generateLineHeight", toggles.line_height)?,
        };

        Ok(Self {
            sort_resources,
            colors_filter: reader.regex("colorsFilter")?,
            text_styles_filter: reader.regex("textStylesFilter")?,
            duplicate_suffix: reader.string("duplicateSuffix")?,
            exclude_duplicates: reader
                .bool_or("excludeDuplicates", defaults.exclude_duplicates)?,
            default_font_family: reader.string("defaultFontFamily")?,
            ignore_character_spacing: reader
                .bool_or("ignoreCharacterSpacing", defaults.ignore_character_spacing)?,
            ignore_font_family: reader
                .bool_or("ignoreFontFamily", defaults.ignore_font_family)?,
            ignore_line_height: reader
                .bool_or("ignoreLineHeight", defaults.ignore_line_height)?,
            text_alignment_mode,
            add_character_ellipsis: reader
                .bool_or("addCharacterEllipsis", defaults.add_character_ellipsis)?,
            asset_uri_scheme: reader
                .string("assetUriScheme")?
                .unwrap_or(defaults.asset_uri_scheme),
            generate,
        })
    }

    /// Duplicate suffix, if one is configured.
    pub fn duplicate_suffix(&self) -> Option<&str> {
        self.duplicate_suffix.as_deref()
    }
}

/// Typed access to an option source.
struct Reader<'a> {
    source: &'a dyn OptionSource,
}

impl Reader<'_> {
    /// Missing and `null` values are both "unset".
    fn get(&self, name: &str) -> Option<Value> {
        self.source.get_option(name).filter(|v| !v.is_null())
    }

    fn bool(&self, name: &'static str) -> Result<Option<bool>> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(Value::String(s)) if s == "true" || s == "false" => Ok(Some(s == "true")),
            Some(other) => Err(CodegenError::InvalidOption {
                option: name,
                message: format!("expected a boolean, got {}", other),
            }),
        }
    }

    fn bool_or(&self, name: &'static str, default: bool) -> Result<bool> {
        Ok(self.bool(name)?.unwrap_or(default))
    }

    /// Empty strings count as unset.
    fn string(&self, name: &'static str) -> Result<Option<String>> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::String(s)) if s.is_empty() => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => Err(CodegenError::InvalidOption {
                option: name,
                message: format!("expected a string, got {}", other),
            }),
        }
    }

    fn regex(&self, name: &'static str) -> Result<Option<Regex>> {
        self.string(name)?
            .map(|pattern| {
                Regex::new(&pattern).map_err(|source| CodegenError::InvalidFilter {
                    option: name,
                    source,
                })
            })
            .transpose()
    }
}
