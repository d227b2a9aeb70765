//! HTML format
//!
//! | Node                | HTML                                                   |
//! |---------------------|--------------------------------------------------------|
//! | Heading             | `<hN>content</hN>`                                     |
//! | Text                | `<p>content</p>`                                       |
//! | Link                | `<a href="url">content</a>`                            |
//! | Image               | `<img src="source" alt="content" />`                   |
//! | Citation            | `<blockquote>content <cite>- author</cite></blockquote>` |
//! | Comment             | `<!-- content -->`                                     |
//! | Meta                | `<meta name="name" content="content" />`               |
//! | Anchor              | `<a id="#content"></a>`                                |
//!
//! Content is emitted verbatim, without escaping. Blocks are joined with a single newline and
//! an anchor becomes the `id` of the element before it.

use super::format::Format;
use super::visitor::NodeVisitor;
use crate::artefact::ast::{Anchor, Citation, Comment, Heading, Image, Link, Meta, Text};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static OPENING_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<(\w+)").expect("opening tag pattern is valid"));

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat;

impl NodeVisitor for HtmlFormat {
    fn visit_heading(&self, node: &Heading) -> String {
        format!("<h{level}>{}</h{level}>", node.content, level = node.level)
    }

    fn visit_text(&self, node: &Text) -> String {
        format!("<p>{}</p>", node.content)
    }

    fn visit_link(&self, node: &Link) -> String {
        format!("<a href=\"{}\">{}</a>", node.url, node.content)
    }

    fn visit_image(&self, node: &Image) -> String {
        format!("<img src=\"{}\" alt=\"{}\" />", node.source, node.content)
    }

    fn visit_citation(&self, node: &Citation) -> String {
        match &node.author {
            Some(author) => format!(
                "<blockquote>{} <cite>- {}</cite></blockquote>",
                node.content, author
            ),
            None => format!("<blockquote>{}</blockquote>", node.content),
        }
    }

    fn visit_comment(&self, node: &Comment) -> String {
        format!("<!-- {} -->", node.content)
    }

    fn visit_meta(&self, node: &Meta) -> String {
        format!("<meta name=\"{}\" content=\"{}\" />", node.name, node.content)
    }

    fn visit_anchor(&self, node: &Anchor) -> String {
        format!("<a id=\"#{}\"></a>", node.content)
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragments, one element per block"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn block_separator(&self) -> &str {
        "\n"
    }

    /// `<h2>Title</h2>` becomes `<h2 id="slug">Title</h2>`; text without a leading tag is kept
    fn attach_anchor(&self, rendered: &str, slug: &str) -> String {
        OPENING_TAG
            .replace(rendered, |caps: &Captures| {
                format!("<{} id=\"{}\"", &caps[1], slug)
            })
            .into_owned()
    }
}
