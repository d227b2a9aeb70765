//! Document validation
//!
//!     Rules check individual nodes of an already parsed document. They never change the
//!     document or the rendering; they only report. A rule passes every node it does not apply
//!     to, so a rule set can be run over the whole document.
//!
//!     Built-in rules:
//!
//!         - [RequiredContentRule]: nodes of a kind must have non-blank content.
//!         - [MaxLengthRule]: content of a kind must not exceed a number of characters.
//!         - [ValidUrlRule]: link urls and image sources must look like urls. Link targets
//!           naming an anchor of the document are accepted.

use crate::artefact::ast::{Document, Node};
use crate::artefact::diagnostics::Position;
use crate::artefact::interpreter::slugify;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$")
        .expect("url pattern is valid")
});

pub trait ValidationRule {
    fn validate(&self, node: &Node) -> bool;
    fn error_message(&self) -> String;
}

/// Nodes of `kind` must have content other than whitespace
#[derive(Debug, Clone)]
pub struct RequiredContentRule {
    kind: String,
}

impl RequiredContentRule {
    pub fn new(kind: impl Into<String>) -> Self {
        Self { kind: kind.into() }
    }
}

impl ValidationRule for RequiredContentRule {
    fn validate(&self, node: &Node) -> bool {
        node.kind() != self.kind || node.content().is_some_and(|c| !c.trim().is_empty())
    }

    fn error_message(&self) -> String {
        format!("{} must have non-empty content", self.kind)
    }
}

/// Content of `kind` nodes is at most `max_length` characters
#[derive(Debug, Clone)]
pub struct MaxLengthRule {
    kind: String,
    max_length: usize,
}

impl MaxLengthRule {
    pub fn new(kind: impl Into<String>, max_length: usize) -> Self {
        Self {
            kind: kind.into(),
            max_length,
        }
    }
}

impl ValidationRule for MaxLengthRule {
    fn validate(&self, node: &Node) -> bool {
        node.kind() != self.kind
            || node
                .content()
                .is_some_and(|c| c.chars().count() <= self.max_length)
    }

    fn error_message(&self) -> String {
        format!(
            "{} content must not exceed {} characters",
            self.kind, self.max_length
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct ValidUrlRule {
    anchors: HashSet<String>,
}

impl ValidUrlRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also accept link targets that name one of `doc`'s anchors
    pub fn for_document(doc: &Document) -> Self {
        let anchors = doc
            .iter()
            .filter_map(|node| match node {
                Node::Anchor(anchor) => Some(slugify(&anchor.content)),
                _ => None,
            })
            .collect();
        Self { anchors }
    }
}

impl ValidationRule for ValidUrlRule {
    fn validate(&self, node: &Node) -> bool {
        match node {
            Node::Link(link) => {
                self.anchors.contains(&slugify(&link.url)) || URL_PATTERN.is_match(&link.url)
            }
            Node::Image(image) => URL_PATTERN.is_match(&image.source),
            _ => true,
        }
    }

    fn error_message(&self) -> String {
        "URL must be valid".to_string()
    }
}

/// A node that failed a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub message: String,
    pub node_kind: &'static str,
    pub position: Position,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at line {}, column {}: {}",
            self.node_kind, self.position.line, self.position.column, self.message
        )
    }
}

/// The rules `check` runs when none are given
pub fn default_rules(doc: &Document, max_heading_length: usize) -> Vec<Box<dyn ValidationRule>> {
    vec![
        Box::new(RequiredContentRule::new("Heading")),
        Box::new(RequiredContentRule::new("Link")),
        Box::new(RequiredContentRule::new("Anchor")),
        Box::new(MaxLengthRule::new("Heading", max_heading_length)),
        Box::new(ValidUrlRule::for_document(doc)),
    ]
}

/// Run every rule over every child, in document order
pub fn validate_document(
    doc: &Document,
    rules: &[Box<dyn ValidationRule>],
) -> Vec<ValidationIssue> {
    doc.iter()
        .flat_map(|node| {
            rules
                .iter()
                .filter(|rule| !rule.validate(node))
                .map(move |rule| ValidationIssue {
                    message: rule.error_message(),
                    node_kind: node.kind(),
                    position: node.position(),
                })
        })
        .collect()
}
