//! Error types for XAML generation.

use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during XAML generation.
///
/// Absence (no matching resource, no mapping for a layer) is never an
/// error; these variants cover bad configuration and conflicting output.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// A filter option is not a valid regular expression.
    #[error("Invalid filter for '{option}': {source}")]
    InvalidFilter {
        option: &'static str,
        #[source]
        source: regex::Error,
    },

    /// An option has a value of the wrong type or an unknown variant.
    #[error("Invalid value for option '{option}': {message}")]
    InvalidOption {
        option: &'static str,
        message: String,
    },

    /// Two resources normalize to the same key in one dictionary.
    #[error("Resource key '{key}' is produced by both '{first}' and '{second}'")]
    DuplicateResourceKey {
        key: String,
        first: String,
        second: String,
    },

    /// A resource name normalizes to an empty key.
    #[error("Resource name '{name}' does not yield a usable key")]
    EmptyResourceKey { name: String },

    /// Template rendering error.
    #[error("Template error: {0}")]
    TemplateError(#[from] handlebars::RenderError),

    /// Template not found.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Invalid template.
    #[error("Invalid template: {0}")]
    InvalidTemplate(#[from] handlebars::TemplateError),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
