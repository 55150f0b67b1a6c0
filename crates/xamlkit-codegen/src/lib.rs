//! XAML generation from design styleguides.
//!
//! This crate turns a design project's colors, text styles and layers into
//! XAML: color and brush resources, `TextBlock` styles, resource
//! dictionaries, and per-layer markup (text blocks, linear gradient
//! brushes, images).
//!
//! Values that equal a named project resource are emitted as
//! `{StaticResource ...}` references; everything else is emitted literally.
//!
//! # Example
//!
//! ```ignore
//! use xamlkit_codegen::{Context, GeneratorOptions, XamlExtension};
//!
//! let ext = XamlExtension::new()?;
//! let ctx = Context::new(&project, GeneratorOptions::default());
//! let code = ext.styleguide_colors(&ctx, &project.colors)?;
//! println!("{}", code.code);
//! ```

pub mod collection;
pub mod document;
pub mod error;
pub mod extension;
pub mod keys;
pub mod options;
pub mod resolver;
pub mod templates;
pub mod units;
pub mod views;

pub use collection::{CollectionPipeline, Named};
pub use document::{Code, ExportedFile, Language, COLORS_FILENAME, TEXT_STYLES_FILENAME};
pub use error::{CodegenError, Result};
pub use extension::{Context, XamlExtension};
pub use keys::{has_duplicate_suffix, normalize_key};
pub use options::{GenerateToggles, GeneratorOptions, OptionSource, TextAlignmentMode};
pub use resolver::{Resolver, StyleResolution};
pub use templates::TemplateEngine;
pub use units::{character_spacing, font_weight, hex_color, FontWeight};
pub use views::ViewBuilder;
