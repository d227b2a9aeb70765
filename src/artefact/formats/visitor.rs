//! Per-kind rendering contract
//!
//! A visitor owns exactly one rendering rule per leaf node kind. The rules are total: they
//! cannot fail. The only faults are nodes that a well-formed flat document never contains, and
//! those are caught by [NodeVisitor::visit] before any rule runs.

use crate::artefact::ast::{
    Anchor, Citation, Comment, Heading, Image, Link, Meta, Node, Text, VariableDeclaration,
    VariableUse,
};
use crate::artefact::lexing::tokenizers::MAX_HEADING_LEVEL;
use thiserror::Error;

/// A node the visitors refuse to render
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderFault {
    #[error("Documents cannot be nested")]
    NestedDocument,
    #[error("Invalid heading level: {0}")]
    InvalidHeadingLevel(u8),
}

pub trait NodeVisitor {
    fn visit_heading(&self, node: &Heading) -> String;
    fn visit_text(&self, node: &Text) -> String;
    fn visit_link(&self, node: &Link) -> String;
    fn visit_image(&self, node: &Image) -> String;
    fn visit_citation(&self, node: &Citation) -> String;
    fn visit_comment(&self, node: &Comment) -> String;
    fn visit_meta(&self, node: &Meta) -> String;
    fn visit_anchor(&self, node: &Anchor) -> String;

    /// Declarations produce no output; the interpreter records their value
    fn visit_variable_declaration(&self, _node: &VariableDeclaration) -> String {
        String::new()
    }

    /// The `${name}` placeholder, substituted after the whole document is rendered
    fn visit_variable_use(&self, node: &VariableUse) -> String {
        format!("${{{}}}", node.content)
    }

    fn visit(&self, node: &Node) -> Result<String, RenderFault> {
        let rendered = match node {
            Node::Document(_) => return Err(RenderFault::NestedDocument),
            Node::Heading(heading) => {
                if !(1..=MAX_HEADING_LEVEL).contains(&heading.level) {
                    return Err(RenderFault::InvalidHeadingLevel(heading.level));
                }
                self.visit_heading(heading)
            }
            Node::Text(text) => self.visit_text(text),
            Node::Link(link) => self.visit_link(link),
            Node::Image(image) => self.visit_image(image),
            Node::Citation(citation) => self.visit_citation(citation),
            Node::Comment(comment) => self.visit_comment(comment),
            Node::Meta(meta) => self.visit_meta(meta),
            Node::Anchor(anchor) => self.visit_anchor(anchor),
            Node::VariableDeclaration(decl) => self.visit_variable_declaration(decl),
            Node::VariableUse(usage) => self.visit_variable_use(usage),
        };
        Ok(rendered)
    }
}
