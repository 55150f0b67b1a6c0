//! Conversions from design units and enums to XAML values.

use serde::Serialize;
use xamlkit_core::{Color, FontStyle, TextAlign};

/// Points per em assumed when converting letter spacing.
const POINTS_PER_EM: f64 = 12.0;

/// Encode a color as `#AARRGGBB`, uppercase, every channel two digits.
pub fn hex_color(color: &Color) -> String {
    format!(
        "#{:02X}{:02X}{:02X}{:02X}",
        color.alpha8(),
        color.r,
        color.g,
        color.b
    )
}

/// Round to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Convert letter spacing in points to XAML `CharacterSpacing`
/// (thousandths of an em).
pub fn character_spacing(points: f64) -> i64 {
    (points / POINTS_PER_EM * 1000.0).round() as i64
}

/// XAML `FontWeight` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FontWeight {
    Thin,
    ExtraLight,
    Light,
    SemiLight,
    Normal,
    Medium,
    SemiBold,
    Bold,
    ExtraBold,
    Black,
    ExtraBlack,
}

impl FontWeight {
    /// Map a numeric weight. Values outside the table are `Normal`;
    /// there is no interpolation between entries.
    pub fn from_numeric(weight: u16) -> Self {
        match weight {
            100 => Self::Thin,
            200 => Self::ExtraLight,
            300 => Self::Light,
            350 => Self::SemiLight,
            400 => Self::Normal,
            500 => Self::Medium,
            600 => Self::SemiBold,
            700 => Self::Bold,
            800 => Self::ExtraBold,
            900 => Self::Black,
            950 => Self::ExtraBlack,
            _ => Self::Normal,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Thin => "Thin",
            Self::ExtraLight => "ExtraLight",
            Self::Light => "Light",
            Self::SemiLight => "SemiLight",
            Self::Normal => "Normal",
            Self::Medium => "Medium",
            Self::SemiBold => "SemiBold",
            Self::Bold => "Bold",
            Self::ExtraBold => "ExtraBold",
            Self::Black => "Black",
            Self::ExtraBlack => "ExtraBlack",
        }
    }
}

impl std::fmt::Display for FontWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorthand for [`FontWeight::from_numeric`].
pub fn font_weight(weight: u16) -> FontWeight {
    FontWeight::from_numeric(weight)
}

/// XAML `FontStyle` name.
pub fn font_style(style: FontStyle) -> &'static str {
    match style {
        FontStyle::Normal => "Normal",
        FontStyle::Italic => "Italic",
    }
}

/// XAML `TextAlignment` name.
pub fn text_alignment(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "Left",
        TextAlign::Center => "Center",
        TextAlign::Right => "Right",
        TextAlign::Justify => "Justify",
    }
}
