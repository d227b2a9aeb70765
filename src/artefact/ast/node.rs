//! The node variant set

use super::document::Document;
use super::elements::{
    Anchor, Citation, Comment, Heading, Image, Link, Meta, Text, VariableDeclaration, VariableUse,
};
use super::snapshot::{snapshot_from_node, NodeSnapshot};
use crate::artefact::diagnostics::Position;

/// How a node takes part in adjacency fusion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Plain,
    /// Fused with the previous and next sibling into one text flow
    Inline,
    /// Attached to the rendering of the previous sibling
    Inset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Document(Document),
    Heading(Heading),
    Link(Link),
    Image(Image),
    Citation(Citation),
    Comment(Comment),
    Meta(Meta),
    Text(Text),
    Anchor(Anchor),
    VariableDeclaration(VariableDeclaration),
    VariableUse(VariableUse),
}

impl Node {
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Document(_) => "Document",
            Node::Heading(_) => "Heading",
            Node::Link(_) => "Link",
            Node::Image(_) => "Image",
            Node::Citation(_) => "Citation",
            Node::Comment(_) => "Comment",
            Node::Meta(_) => "Meta",
            Node::Text(_) => "Text",
            Node::Anchor(_) => "Anchor",
            Node::VariableDeclaration(_) => "VariableDeclaration",
            Node::VariableUse(_) => "VariableUse",
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Node::Document(doc) => doc.position(),
            Node::Heading(n) => n.position,
            Node::Link(n) => n.position,
            Node::Image(n) => n.position,
            Node::Citation(n) => n.position,
            Node::Comment(n) => n.position,
            Node::Meta(n) => n.position,
            Node::Text(n) => n.position,
            Node::Anchor(n) => n.position,
            Node::VariableDeclaration(n) => n.position,
            Node::VariableUse(n) => n.position,
        }
    }

    /// The primary text of the node; documents have none
    pub fn content(&self) -> Option<&str> {
        match self {
            Node::Document(_) => None,
            Node::Heading(n) => Some(&n.content),
            Node::Link(n) => Some(&n.content),
            Node::Image(n) => Some(&n.content),
            Node::Citation(n) => Some(&n.content),
            Node::Comment(n) => Some(&n.content),
            Node::Meta(n) => Some(&n.content),
            Node::Text(n) => Some(&n.content),
            Node::Anchor(n) => Some(&n.content),
            Node::VariableDeclaration(n) => Some(&n.content),
            Node::VariableUse(n) => Some(&n.content),
        }
    }

    pub fn capability(&self) -> Capability {
        match self {
            Node::Link(_) => Capability::Inline,
            Node::Anchor(_) => Capability::Inset,
            _ => Capability::Plain,
        }
    }

    /// Whether the interpreter fuses this node with its neighbours.
    ///
    /// Variable uses are plain nodes but still read as part of the surrounding text.
    pub fn flows_inline(&self) -> bool {
        self.capability() == Capability::Inline || matches!(self, Node::VariableUse(_))
    }

    pub fn snapshot(&self) -> NodeSnapshot {
        snapshot_from_node(self)
    }
}

macro_rules! impl_from_element {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Node {
                fn from(node: $variant) -> Self {
                    Node::$variant(node)
                }
            }
        )*
    };
}

impl_from_element!(
    Document,
    Heading,
    Link,
    Image,
    Citation,
    Comment,
    Meta,
    Text,
    Anchor,
    VariableDeclaration,
    VariableUse,
);
