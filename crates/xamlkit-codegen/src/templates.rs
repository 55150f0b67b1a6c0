//! Template engine for XAML generation.

use crate::document::indent;
use crate::error::{CodegenError, Result};
use handlebars::Handlebars;
use serde::Serialize;

/// Built-in XAML templates, by name.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("colors", include_str!("templates/colors.hbs")),
    ("text_styles", include_str!("templates/text_styles.hbs")),
    ("text_block", include_str!("templates/text_block.hbs")),
    ("linear_gradient", include_str!("templates/linear_gradient.hbs")),
    ("image", include_str!("templates/image.hbs")),
    ("resource_dictionary", include_str!("templates/resource_dictionary.hbs")),
];

/// Template engine using Handlebars, escaping for XML attribute and text
/// content.
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create an engine with helpers but no templates.
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(xml_escape);

        // Register custom helpers
        Self::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Create an engine with every built-in XAML template registered.
    pub fn xaml() -> Result<Self> {
        let mut engine = Self::new();
        for (name, template) in BUILTIN_TEMPLATES {
            engine.register_template(name, template)?;
        }
        Ok(engine)
    }

    /// Register a template.
    pub fn register_template(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(CodegenError::InvalidTemplate)?;
        Ok(())
    }

    /// Render a registered template.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String> {
        if !self.handlebars.has_template(name) {
            return Err(CodegenError::TemplateNotFound(name.to_string()));
        }
        self.handlebars
            .render(name, data)
            .map_err(CodegenError::TemplateError)
    }

    /// Register custom helpers.
    fn register_helpers(handlebars: &mut Handlebars) {
        // Shortest decimal form: 1.0 renders as "1", 0.25 as "0.25"
        handlebars.register_helper(
            "number",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    if let Some(value) = h.param(0).and_then(|v| v.value().as_f64()) {
                        out.write(&format_number(value))?;
                    }
                    Ok(())
                },
            ),
        );

        // {StaticResource key}
        handlebars.register_helper(
            "static_resource",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let key = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    out.write(&xml_escape(&static_resource(key)))?;
                    Ok(())
                },
            ),
        );

        // Indent helper
        handlebars.register_helper(
            "indent",
            Box::new(
                |h: &handlebars::Helper,
                 _r: &Handlebars,
                 _ctx: &handlebars::Context,
                 _rc: &mut handlebars::RenderContext,
                 out: &mut dyn handlebars::Output| {
                    let content = h
                        .param(0)
                        .and_then(|v| v.value().as_str())
                        .unwrap_or("");
                    let spaces = h
                        .param(1)
                        .and_then(|v| v.value().as_u64())
                        .unwrap_or(4) as usize;
                    out.write(&indent(content, spaces))?;
                    Ok(())
                },
            ),
        );
    }
}

impl<'a> Default for TemplateEngine<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// `{StaticResource key}` markup extension.
pub fn static_resource(key: &str) -> String {
    format!("{{StaticResource {}}}", key)
}

/// Format a number without a trailing `.0`.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

/// Escape text for XML content and attribute values.
pub fn xml_escape(data: &str) -> String {
    let mut escaped = String::with_capacity(data.len());
    for c in data.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
