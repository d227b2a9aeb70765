//! Markdown format
//!
//! Plain Markdown where it has a construct (headings, links, images, quotes) and raw HTML
//! where it has none (comments, anchors). Meta renders to nothing; its values stay available
//! through `Document::metadata`.
//!
//! Blocks are separated by a blank line. An anchor is emitted as a standalone `<a id>` tag on
//! the line before the block it marks.

use super::format::Format;
use super::visitor::NodeVisitor;
use crate::artefact::ast::{Anchor, Citation, Comment, Heading, Image, Link, Meta, Text};

#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownFormat;

impl NodeVisitor for MarkdownFormat {
    fn visit_heading(&self, node: &Heading) -> String {
        format!("{} {}", "#".repeat(node.level as usize), node.content)
    }

    fn visit_text(&self, node: &Text) -> String {
        node.content.clone()
    }

    fn visit_link(&self, node: &Link) -> String {
        format!("[{}]({})", node.content, node.url)
    }

    fn visit_image(&self, node: &Image) -> String {
        format!("![{}]({})", node.content, node.source)
    }

    fn visit_citation(&self, node: &Citation) -> String {
        match &node.author {
            Some(author) => format!("> {}\n> — {}", node.content, author),
            None => format!("> {}", node.content),
        }
    }

    fn visit_comment(&self, node: &Comment) -> String {
        format!("<!-- {} -->", node.content)
    }

    fn visit_meta(&self, _node: &Meta) -> String {
        String::new()
    }

    fn visit_anchor(&self, node: &Anchor) -> String {
        format!("<a id=\"{}\"></a>", node.content)
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown with inline HTML for comments and anchors"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn block_separator(&self) -> &str {
        "\n\n"
    }

    fn attach_anchor(&self, rendered: &str, slug: &str) -> String {
        format!("<a id=\"{}\"></a>\n{}", slug, rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_hashes_match_level() {
        assert_eq!(
            MarkdownFormat.visit_heading(&Heading::new(2, "Test Heading")),
            "## Test Heading"
        );
        assert_eq!(
            MarkdownFormat.visit_heading(&Heading::new(6, "Deep")),
            "###### Deep"
        );
    }

    #[test]
    fn test_links_and_images() {
        assert_eq!(
            MarkdownFormat.visit_link(&Link::new("docs", "https://example.com", false)),
            "[docs](https://example.com)"
        );
        assert_eq!(
            MarkdownFormat.visit_image(&Image::new("Test Image", "image.jpg")),
            "![Test Image](image.jpg)"
        );
    }

    #[test]
    fn test_citation_author_line() {
        let quote = Citation::new("Stay hungry").with_author("Jobs");
        assert_eq!(MarkdownFormat.visit_citation(&quote), "> Stay hungry\n> — Jobs");
    }

    #[test]
    fn test_meta_is_silent_and_comment_passes_through() {
        assert_eq!(MarkdownFormat.visit_meta(&Meta::new("title", "Doc")), "");
        assert_eq!(
            MarkdownFormat.visit_comment(&Comment::new("note")),
            "<!-- note -->"
        );
    }

    #[test]
    fn test_attach_anchor_prepends_tag() {
        assert_eq!(
            MarkdownFormat.attach_anchor("## Intro", "intro"),
            "<a id=\"intro\"></a>\n## Intro"
        );
    }
}
