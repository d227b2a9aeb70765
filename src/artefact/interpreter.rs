//! Interpreter
//!
//!     Renders a [Document] with a [Format]. A render runs in four steps:
//!
//!         1. Anchor collection: every Anchor node is recorded as slug -> content.
//!         2. Primary walk: children are rendered left to right, one output block each,
//!            except where an adjacency rule applies (below).
//!         3. Substitution: `${name}` placeholders left in the output are replaced by the
//!            last recorded values. Unknown names are kept as written.
//!
//!     A variable use takes the value declared before it in the walk. A use with no earlier
//!     declaration is emitted as a `${name}` placeholder for step 3.
//!         4. Anchor resolution: `<a href="X">` is rewritten to `#slug` when the slug of X
//!            names a collected anchor. Any other link passes through.
//!
//!     Blocks are joined with the format's separator and the result is trimmed between steps
//!     2 and 3.
//!
//! Adjacency Rules
//!
//!     Inline (links, variable uses): the node is rendered together with its neighbours. The
//!     previous block is taken back from the output, the next sibling is rendered and consumed,
//!     and the three are fused into one block. A block link (`@`, not `@/`) is instead stacked
//!     between its neighbours, one per line. Since the fused block is the last output entry,
//!     several links in one paragraph fuse one window after the other.
//!
//!     Inset (anchors): the previous block is taken back and the anchor is attached to it by
//!     the format. A block takes at most one anchor; an anchor with no previous sibling, or
//!     following another anchor, renders on its own.
//!
//! Errors
//!
//!     Unlike lexing and parsing, rendering does not recover. The first node a visitor refuses
//!     aborts the whole render with an [InterpreterError] carrying that node's kind and
//!     position.
//!
//!     Variable and anchor tables belong to one `Interpreter`, which `interpret` consumes, so
//!     renders never share state.

mod fusion;
mod resolve;

pub use resolve::slugify;

use crate::artefact::ast::{Capability, Document, Node};
use crate::artefact::diagnostics::InterpreterError;
use crate::artefact::formats::{Format, OutputFormat};
use fusion::{fuse_inline, stack_blocks};
use resolve::{resolve_anchors, resolve_variables};
use std::collections::HashMap;
use tracing::debug;

pub struct Interpreter<'a> {
    format: &'a dyn Format,
    variables: HashMap<String, String>,
    anchors: HashMap<String, String>,
}

impl<'a> Interpreter<'a> {
    pub fn new(format: &'a dyn Format) -> Self {
        Self {
            format,
            variables: HashMap::new(),
            anchors: HashMap::new(),
        }
    }

    pub fn interpret(mut self, doc: &Document) -> Result<String, InterpreterError> {
        self.collect_anchors(doc);
        let assembled = self.visit_document(doc)?;
        let substituted = resolve_variables(&assembled, &self.variables);
        let output = resolve_anchors(&substituted, &self.anchors);

        debug!(
            format = self.format.name(),
            nodes = doc.len(),
            variables = self.variables.len(),
            anchors = self.anchors.len(),
            bytes = output.len(),
            "rendering finished"
        );
        Ok(output)
    }

    fn collect_anchors(&mut self, doc: &Document) {
        for child in doc {
            match child {
                Node::Anchor(anchor) => {
                    self.anchors
                        .insert(slugify(&anchor.content), anchor.content.clone());
                }
                Node::Document(nested) => self.collect_anchors(nested),
                _ => {}
            }
        }
    }

    fn visit_document(&mut self, doc: &Document) -> Result<String, InterpreterError> {
        let children = &doc.children;
        let mut blocks: Vec<String> = Vec::with_capacity(children.len());
        let mut index = 0;
        // Whether the last block already carries an attached anchor; fusion keeps it
        let mut anchored = false;

        while index < children.len() {
            let child = &children[index];

            if child.flows_inline() {
                let previous = blocks.pop().unwrap_or_default();
                let next = children.get(index + 1);
                blocks.push(self.combine(&previous, child, next)?);
                index += if next.is_some() { 2 } else { 1 };
                continue;
            }

            if child.capability() == Capability::Inset && !anchored {
                if let Some(previous) = blocks.pop() {
                    let slug = slugify(child.content().unwrap_or_default());
                    blocks.push(self.format.attach_anchor(&previous, &slug));
                    index += 1;
                    anchored = true;
                    continue;
                }
            }

            blocks.push(self.visit_node(child)?);
            index += 1;
            anchored = false;
        }

        Ok(blocks
            .join(self.format.block_separator())
            .trim()
            .to_string())
    }

    fn combine(
        &mut self,
        previous: &str,
        current: &Node,
        next: Option<&Node>,
    ) -> Result<String, InterpreterError> {
        let current_rendered = self.visit_node(current)?;
        let next_rendered = match next {
            Some(node) => self.visit_node(node)?,
            None => String::new(),
        };

        match current {
            Node::Link(link) if !link.is_inline => {
                Ok(stack_blocks(previous, &current_rendered, &next_rendered))
            }
            _ => Ok(fuse_inline(previous, &current_rendered, &next_rendered)),
        }
    }

    fn visit_node(&mut self, node: &Node) -> Result<String, InterpreterError> {
        match node {
            Node::VariableDeclaration(decl) => {
                self.variables
                    .insert(decl.name.clone(), decl.content.clone());
            }
            // Bound to the value in effect at this point of the walk
            Node::VariableUse(usage) => {
                if let Some(value) = self.variables.get(&usage.content) {
                    return Ok(value.clone());
                }
            }
            _ => {}
        }

        self.format.visit(node).map_err(|fault| {
            InterpreterError::new(format!(
                "Error processing node of type {}: {}",
                node.kind(),
                fault
            ))
            .at_node(node.kind(), node.position())
        })
    }
}

/// Render `doc` with one of the built-in formats
pub fn render(doc: &Document, format: OutputFormat) -> Result<String, InterpreterError> {
    Interpreter::new(format.as_format()).interpret(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artefact::ast::{
        Anchor, Comment, Heading, Image, Link, Meta, Text, VariableDeclaration, VariableUse,
    };
    use crate::artefact::diagnostics::Position;

    fn html(children: Vec<Node>) -> String {
        render(&Document::new(children), OutputFormat::Html).unwrap()
    }

    fn markdown(children: Vec<Node>) -> String {
        render(&Document::new(children), OutputFormat::Markdown).unwrap()
    }

    #[test]
    fn test_block_link_stays_on_its_own_line() {
        let output = html(vec![
            Heading::new(1, "Test Heading").into(),
            Text::new("This is a test paragraph.").into(),
            Link::new("Test Link", "https://example.com", false).into(),
        ]);
        assert_eq!(
            output,
            "<h1>Test Heading</h1>\n<p>This is a test paragraph.</p>\n<a href=\"https://example.com\">Test Link</a>"
        );
    }

    #[test]
    fn test_markdown_blocks_are_separated_by_blank_lines() {
        let output = markdown(vec![
            Heading::new(2, "Test Heading").into(),
            Text::new("This is a test paragraph.").into(),
            Image::new("Test Image", "image.jpg").into(),
        ]);
        assert_eq!(
            output,
            "## Test Heading\n\nThis is a test paragraph.\n\n![Test Image](image.jpg)"
        );
    }

    #[test]
    fn test_anchor_resolution() {
        let output = html(vec![
            Heading::new(2, "Test Heading").into(),
            Anchor::new("section 1").at(Position::new(2, 1)).into(),
            Text::new("Go to ").at(Position::new(3, 1)).into(),
            Link::new("Section 1", "section 1", true)
                .at(Position::new(3, 7))
                .into(),
        ]);
        assert_eq!(
            output,
            "<h2 id=\"section-1\">Test Heading</h2>\n<p>Go to <a href=\"#section-1\">Section 1</a></p>"
        );
    }

    #[test]
    fn test_anchor_without_previous_sibling_renders_alone() {
        assert_eq!(
            html(vec![Anchor::new("top").into(), Text::new("Body").into()]),
            "<a id=\"#top\"></a>\n<p>Body</p>"
        );
    }

    #[test]
    fn test_second_anchor_renders_on_its_own() {
        let output = html(vec![
            Heading::new(2, "H").into(),
            Anchor::new("a").into(),
            Anchor::new("b").into(),
        ]);
        assert_eq!(output, "<h2 id=\"a\">H</h2>\n<a id=\"#b\"></a>");
    }

    #[test]
    fn test_markdown_anchor_prefixes_previous_block() {
        assert_eq!(
            markdown(vec![Heading::new(1, "Intro").into(), Anchor::new("Intro").into()]),
            "<a id=\"intro\"></a>\n# Intro"
        );
    }

    #[test]
    fn test_variables_resolve_inside_paragraph() {
        let output = html(vec![
            VariableDeclaration::new("author", "Jane Doe").into(),
            Text::new("This document was written by ").into(),
            VariableUse::new("author").into(),
            Text::new(".").into(),
        ]);
        assert_eq!(output, "<p>This document was written by Jane Doe.</p>");
    }

    #[test]
    fn test_several_links_in_one_paragraph() {
        let output = html(vec![
            Text::new("See ").into(),
            Link::new("a", "https://a.example.com", true).into(),
            Text::new(" and ").into(),
            Link::new("b", "https://b.example.com", true).into(),
            Text::new(" end.").into(),
        ]);
        assert_eq!(
            output,
            "<p>See <a href=\"https://a.example.com\">a</a> and <a href=\"https://b.example.com\">b</a> end.</p>"
        );
    }

    #[test]
    fn test_leading_inline_link_has_no_previous_block() {
        let output = html(vec![
            Link::new("start", "https://example.com", true).into(),
            Text::new(" here").into(),
        ]);
        assert_eq!(
            output,
            "<a href=\"https://example.com\">start</a><p> here</p>"
        );
    }

    #[test]
    fn test_meta_and_comment_only_markdown() {
        let output = markdown(vec![
            Meta::new("title", "Doc").into(),
            Meta::new("author", "Jane").into(),
        ]);
        assert_eq!(output, "");

        let output = markdown(vec![Meta::new("title", "Doc").into(), Comment::new("c").into()]);
        assert_eq!(output, "<!-- c -->");
    }

    #[test]
    fn test_nested_document_aborts_render() {
        let doc = Document::new(vec![
            Text::new("fine").into(),
            Document::default().into(),
        ]);
        let err = render(&doc, OutputFormat::Html).unwrap_err();
        assert_eq!(
            err.message,
            "Error processing node of type Document: Documents cannot be nested"
        );
        assert_eq!(err.node_kind, Some("Document"));
        assert_eq!(err.position, Some(Position::new(1, 1)));
    }

    #[test]
    fn test_invalid_heading_level_reports_node_position() {
        let doc = Document::new(vec![Heading::new(9, "Deep").at(Position::new(4, 1)).into()]);
        let err = render(&doc, OutputFormat::Markdown).unwrap_err();
        assert_eq!(
            err.to_string(),
            "InterpreterError: Error processing node of type Heading: Invalid heading level: 9 at line 4, column 1"
        );
    }

    #[test]
    fn test_renders_are_independent() {
        let with_decl = Document::new(vec![
            VariableDeclaration::new("x", "1").into(),
            Text::new("${x}").into(),
        ]);
        let without_decl = Document::new(vec![Text::new("${x}").into()]);
        assert_eq!(render(&with_decl, OutputFormat::Html).unwrap(), "<p>1</p>");
        assert_eq!(render(&without_decl, OutputFormat::Html).unwrap(), "<p>${x}</p>");
    }
}
