//! Document root

use super::node::Node;
use super::snapshot::{snapshot_from_document, NodeSnapshot};
use crate::artefact::diagnostics::Position;
use std::collections::BTreeMap;

/// The root of every parse: an ordered sequence of top-level nodes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub children: Vec<Node>,
}

impl Document {
    pub fn new(children: Vec<Node>) -> Self {
        Self { children }
    }

    /// Documents always start at 1:1
    pub fn position(&self) -> Position {
        Position::new(1, 1)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.children.iter()
    }

    /// Meta name to content, later declarations win
    pub fn metadata(&self) -> BTreeMap<String, String> {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Meta(meta) => Some((meta.name.clone(), meta.content.clone())),
                _ => None,
            })
            .collect()
    }

    pub fn snapshot(&self) -> NodeSnapshot {
        snapshot_from_document(self)
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
