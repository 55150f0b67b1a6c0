//! Generated code records and resource-dictionary assembly.

use serde::Serialize;

use crate::error::Result;
use crate::templates::TemplateEngine;

/// Filename of the exported color dictionary.
pub const COLORS_FILENAME: &str = "Colors.xaml";
/// Filename of the exported text style dictionary.
pub const TEXT_STYLES_FILENAME: &str = "TextBlock.xaml";

/// Language tag of generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Xml,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Xml => "xml",
        }
    }
}

/// A generated fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Code {
    pub code: String,
    pub language: Language,
}

impl Code {
    pub fn xml(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: Language::Xml,
        }
    }
}

/// A generated file ready to be written by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedFile {
    pub code: String,
    pub language: Language,
    pub filename: String,
}

/// Indent every non-blank line by `spaces`.
pub fn indent(content: &str, spaces: usize) -> String {
    let prefix = " ".repeat(spaces);
    content
        .lines()
        .map(|line| {
            if line.trim().is_empty() {
                String::new()
            } else {
                format!("{}{}", prefix, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct DictionaryView<'a> {
    body: &'a str,
}

/// Wrap a fragment into a `ResourceDictionary` file.
pub fn resource_dictionary(
    engine: &TemplateEngine<'_>,
    fragment: &Code,
    filename: &str,
) -> Result<ExportedFile> {
    let code = engine.render("resource_dictionary", &DictionaryView { body: &fragment.code })?;
    tracing::debug!(filename, lines = code.lines().count(), "assembled resource dictionary");
    Ok(ExportedFile {
        code,
        language: fragment.language,
        filename: filename.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_skips_blank_lines() {
        assert_eq!(indent("<A />\n\n<B />", 4), "    <A />\n\n    <B />");
        assert_eq!(indent("", 4), "");
    }

    #[test]
    fn test_resource_dictionary_wraps_fragment() {
        let engine = TemplateEngine::xaml().unwrap();
        let fragment = Code::xml("<Color x:Key=\"Accent\">#FF0078D7</Color>");
        let file = resource_dictionary(&engine, &fragment, COLORS_FILENAME).unwrap();

        assert_eq!(file.filename, "Colors.xaml");
        assert_eq!(file.language, Language::Xml);
        assert!(file.code.starts_with("<ResourceDictionary"));
        assert!(file
            .code
            .contains("\n    <Color x:Key=\"Accent\">#FF0078D7</Color>\n"));
        assert!(file.code.trim_end().ends_with("</ResourceDictionary>"));
    }

    #[test]
    fn test_language_serializes_lowercase() {
        let json = serde_json::to_value(Code::xml("<!-- x -->")).unwrap();
        assert_eq!(json["language"], "xml");
    }
}
