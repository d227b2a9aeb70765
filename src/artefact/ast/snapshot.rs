//! AST Snapshot - a plain data view of the tree
//!
//! The snapshot carries the node type, position, content and every kind specific field as
//! string attributes. It is what tooling consumes: serializers (JSON, YAML) and editor
//! integrations read snapshots instead of matching on `Node` themselves.

use super::document::Document;
use super::node::Node;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A snapshot of an AST node in a normalized, serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// The type of node (e.g., "Heading", "Link")
    #[serde(rename = "type")]
    pub node_type: String,

    pub line: usize,
    pub column: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Kind specific fields (level, url, source, author...)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSnapshot>,
}

impl NodeSnapshot {
    pub fn new(node_type: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            node_type: node_type.into(),
            line,
            column,
            content: None,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_attribute(mut self, key: &str, value: impl ToString) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    pub fn with_children(mut self, children: Vec<NodeSnapshot>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// Build the snapshot of a document and all its children
pub fn snapshot_from_document(doc: &Document) -> NodeSnapshot {
    let position = doc.position();
    NodeSnapshot::new("Document", position.line, position.column)
        .with_children(doc.children.iter().map(snapshot_from_node).collect())
}

pub fn snapshot_from_node(node: &Node) -> NodeSnapshot {
    let position = node.position();
    let base = NodeSnapshot::new(node.kind(), position.line, position.column);
    let base = match node.content() {
        Some(content) => base.with_content(content),
        None => base,
    };

    match node {
        Node::Document(doc) => snapshot_from_document(doc),
        Node::Heading(heading) => base.with_attribute("level", heading.level),
        Node::Link(link) => base
            .with_attribute("url", &link.url)
            .with_attribute("is_inline", link.is_inline),
        Node::Image(image) => base.with_attribute("source", &image.source),
        Node::Citation(citation) => match &citation.author {
            Some(author) => base.with_attribute("author", author),
            None => base,
        },
        Node::Meta(meta) => base.with_attribute("name", &meta.name),
        Node::Anchor(_) => base.with_attribute("is_inset", true),
        Node::VariableDeclaration(decl) => base.with_attribute("name", &decl.name),
        Node::Comment(_) | Node::Text(_) | Node::VariableUse(_) => base,
    }
}
