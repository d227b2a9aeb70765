//! Format registry for format discovery and selection
//!
//! Formats are registered and retrieved by name. [OutputFormat] is the closed set of built-in
//! formats, for callers that do not need a registry.

use super::format::Format;
use super::html::HtmlFormat;
use super::markdown::MarkdownFormat;
use crate::artefact::ast::Document;
use crate::artefact::diagnostics::{Error, FormatError};
use crate::artefact::interpreter::Interpreter;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// The built-in output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    #[serde(alias = "md")]
    Markdown,
}

impl OutputFormat {
    pub fn as_format(self) -> &'static dyn Format {
        match self {
            OutputFormat::Html => &HtmlFormat,
            OutputFormat::Markdown => &MarkdownFormat,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Markdown => "markdown",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(FormatError::FormatNotFound(s.to_string())),
        }
    }
}

/// Registry of output formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::with_defaults();
/// let html = registry.serialize(&document, "html")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format, replacing any format with the same name
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Render a document with the named format
    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, Error> {
        let format = self.get(format)?;
        Ok(Interpreter::new(format).interpret(doc)?)
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(HtmlFormat);
        registry.register(MarkdownFormat);
        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artefact::ast::{Anchor, Citation, Comment, Heading, Image, Link, Meta, Text};
    use crate::artefact::formats::NodeVisitor;

    // Renders every node as its bare content
    struct TestFormat;

    impl NodeVisitor for TestFormat {
        fn visit_heading(&self, node: &Heading) -> String {
            node.content.clone()
        }
        fn visit_text(&self, node: &Text) -> String {
            node.content.clone()
        }
        fn visit_link(&self, node: &Link) -> String {
            node.content.clone()
        }
        fn visit_image(&self, node: &Image) -> String {
            node.content.clone()
        }
        fn visit_citation(&self, node: &Citation) -> String {
            node.content.clone()
        }
        fn visit_comment(&self, node: &Comment) -> String {
            node.content.clone()
        }
        fn visit_meta(&self, node: &Meta) -> String {
            node.content.clone()
        }
        fn visit_anchor(&self, node: &Anchor) -> String {
            node.content.clone()
        }
    }

    impl Format for TestFormat {
        fn name(&self) -> &str {
            "test"
        }
        fn block_separator(&self) -> &str {
            " | "
        }
        fn attach_anchor(&self, rendered: &str, slug: &str) -> String {
            format!("{}#{}", rendered, slug)
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = FormatRegistry::new();
        assert_eq!(registry.formats.len(), 0);
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        assert!(registry.has("test"));
        assert_eq!(registry.get("test").unwrap().name(), "test");
        assert_eq!(registry.list_formats(), vec!["test"]);
    }

    #[test]
    fn test_registry_get_nonexistent() {
        let registry = FormatRegistry::new();
        match registry.get("nonexistent") {
            Err(FormatError::FormatNotFound(name)) => assert_eq!(name, "nonexistent"),
            Ok(_) => panic!("Expected FormatNotFound error"),
        }
    }

    #[test]
    fn test_registry_serialize_with_custom_format() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);

        let doc = Document::new(vec![
            Heading::new(1, "Title").into(),
            Anchor::new("Top Part").into(),
            Text::new("Body").into(),
        ]);
        assert_eq!(
            registry.serialize(&doc, "test").unwrap(),
            "Title#top-part | Body"
        );
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();
        let result = registry.serialize(&Document::default(), "nonexistent");
        assert!(matches!(
            result,
            Err(Error::Format(FormatError::FormatNotFound(_)))
        ));
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(registry.list_formats(), vec!["html", "markdown"]);
    }

    #[test]
    fn test_registry_replace_format() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormat);
        registry.register(TestFormat);
        assert_eq!(registry.list_formats().len(), 1);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("html".parse::<OutputFormat>(), Ok(OutputFormat::Html));
        assert_eq!("MD".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!("markdown".parse::<OutputFormat>(), Ok(OutputFormat::Markdown));
        assert_eq!(
            "pdf".parse::<OutputFormat>(),
            Err(FormatError::FormatNotFound("pdf".to_string()))
        );
    }

    #[test]
    fn test_output_format_matches_registry_names() {
        let registry = FormatRegistry::with_defaults();
        for format in [OutputFormat::Html, OutputFormat::Markdown] {
            assert_eq!(registry.get(format.name()).unwrap().name(), format.name());
            assert_eq!(format.as_format().name(), format.name());
        }
    }
}
