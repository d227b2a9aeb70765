//! Abstract syntax tree
//!
//!     A document is a flat, ordered sequence of nodes. There is no nesting: every node the
//!     parser builds is a direct child of the [Document](document::Document), in source order.
//!
//!     Nodes are built once by the parser and never mutated afterwards.
//!
//! Capabilities
//!
//!     Two node kinds carry extra rendering semantics, expressed as a [Capability] tag rather
//!     than as separate types:
//!
//!         - Inline (Link): fused with its neighbours into the surrounding text flow.
//!         - Inset (Anchor): attaches itself to the rendering of the previous sibling.
//!
//!     Everything else is Plain. The interpreter only branches on the tag.
//!
//! Structured View
//!
//!     Every node exposes a read-only, serializable [NodeSnapshot](snapshot::NodeSnapshot) for
//!     tooling (JSON or YAML dumps, editor integrations).

pub mod document;
pub mod elements;
pub mod node;
pub mod snapshot;

pub use document::Document;
pub use elements::{
    Anchor, Citation, Comment, Heading, Image, Link, Meta, Text, VariableDeclaration, VariableUse,
};
pub use node::{Capability, Node};
pub use snapshot::NodeSnapshot;
