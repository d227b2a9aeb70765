//! Fluent assertion API for parsed documents
//!
//!     Tests that match on `Node` variants directly break every time a field moves. These
//!     assertions go through semantic methods instead, so a change to a node struct is fixed
//!     here once.
//!
//!     ```rust,ignore
//!     use artefact::artefact::testing::assert_ast;
//!
//!     let doc = parse("* Title\nSee @/docs(https://example.com).");
//!     assert_ast(&doc)
//!         .kinds(&["Heading", "Text", "Link", "Text"])
//!         .item(0, |item| {
//!             item.assert_kind("Heading").level(1).content("Title");
//!         })
//!         .item(2, |item| {
//!             item.assert_kind("Link")
//!                 .url("https://example.com")
//!                 .inline(true)
//!                 .at(2, 5);
//!         });
//!     ```
//!
//!     Failures panic with the index of the item, so they read well from `cargo test`.

pub mod matchers;

pub use matchers::TextMatch;

use crate::artefact::ast::{Document, Node};

/// Create an assertion builder for a document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize(children: &[Node]) -> String {
    children
        .iter()
        .map(Node::kind)
        .collect::<Vec<_>>()
        .join(", ")
}

pub struct DocumentAssertion<'a> {
    doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize(&self.doc.children)
        );
        self
    }

    /// Assert the exact sequence of node kinds
    pub fn kinds(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.iter().map(Node::kind).collect();
        assert_eq!(actual, expected, "Unexpected node kinds");
        self
    }

    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(NodeAssertion<'a>),
    {
        assert!(
            index < self.doc.len(),
            "Item index {} out of bounds (document has {} items: [{}])",
            index,
            self.doc.len(),
            summarize(&self.doc.children)
        );

        assertion(NodeAssertion {
            node: &self.doc.children[index],
            context: format!("items[{}]", index),
        });
        self
    }
}

pub struct NodeAssertion<'a> {
    node: &'a Node,
    context: String,
}

impl<'a> NodeAssertion<'a> {
    pub fn assert_kind(self, expected: &str) -> Self {
        assert_eq!(
            self.node.kind(),
            expected,
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.node.kind()
        );
        self
    }

    pub fn content(self, expected: &str) -> Self {
        self.match_content(TextMatch::Exact(expected))
    }

    pub fn content_starts_with(self, prefix: &str) -> Self {
        self.match_content(TextMatch::StartsWith(prefix))
    }

    pub fn content_contains(self, substring: &str) -> Self {
        self.match_content(TextMatch::Contains(substring))
    }

    /// Assert the 1-based position of the node's first character
    pub fn at(self, line: usize, column: usize) -> Self {
        let position = self.node.position();
        assert_eq!(
            (position.line, position.column),
            (line, column),
            "{}: Expected position {}:{}, found {}",
            self.context,
            line,
            column,
            position
        );
        self
    }

    pub fn level(self, expected: u8) -> Self {
        match self.node {
            Node::Heading(heading) => assert_eq!(
                heading.level, expected,
                "{}: Expected heading level {}, found {}",
                self.context, expected, heading.level
            ),
            other => self.wrong_kind("Heading", other),
        }
        self
    }

    pub fn url(self, expected: &str) -> Self {
        match self.node {
            Node::Link(link) => TextMatch::Exact(expected)
                .assert(&link.url, &format!("{} url", self.context)),
            other => self.wrong_kind("Link", other),
        }
        self
    }

    pub fn inline(self, expected: bool) -> Self {
        match self.node {
            Node::Link(link) => assert_eq!(
                link.is_inline, expected,
                "{}: Expected is_inline {}, found {}",
                self.context, expected, link.is_inline
            ),
            other => self.wrong_kind("Link", other),
        }
        self
    }

    pub fn source(self, expected: &str) -> Self {
        match self.node {
            Node::Image(image) => TextMatch::Exact(expected)
                .assert(&image.source, &format!("{} source", self.context)),
            other => self.wrong_kind("Image", other),
        }
        self
    }

    pub fn author(self, expected: Option<&str>) -> Self {
        match self.node {
            Node::Citation(citation) => assert_eq!(
                citation.author.as_deref(),
                expected,
                "{}: Unexpected citation author",
                self.context
            ),
            other => self.wrong_kind("Citation", other),
        }
        self
    }

    /// The name of a Meta or VariableDeclaration node
    pub fn name(self, expected: &str) -> Self {
        let actual = match self.node {
            Node::Meta(meta) => &meta.name,
            Node::VariableDeclaration(decl) => &decl.name,
            other => {
                self.wrong_kind("Meta or VariableDeclaration", other);
                return self;
            }
        };
        TextMatch::Exact(expected).assert(actual, &format!("{} name", self.context));
        self
    }

    fn match_content(self, matcher: TextMatch<'_>) -> Self {
        match self.node.content() {
            Some(content) => matcher.assert(content, &self.context),
            None => panic!("{}: {} has no content", self.context, self.node.kind()),
        }
        self
    }

    fn wrong_kind(&self, expected: &str, found: &Node) {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            found.kind()
        );
    }
}
