//! Output formats
//!
//!     Rendering is split in two layers:
//!
//!         - [NodeVisitor]: one total rendering rule per node kind.
//!         - [Format]: a visitor plus the document level choices (block separator, how an
//!           anchor attaches to the block before it).
//!
//!     The interpreter drives a `&dyn Format` and owns everything that spans more than one
//!     node: adjacency fusion, variable substitution and anchor resolution.
//!
//!     Two formats are built in, [HtmlFormat] and [MarkdownFormat]. They are reachable through
//!     the closed [OutputFormat] enum or by name through a [FormatRegistry].

pub mod format;
pub mod html;
pub mod markdown;
pub mod registry;
pub mod visitor;

pub use format::Format;
pub use html::HtmlFormat;
pub use markdown::MarkdownFormat;
pub use registry::{FormatRegistry, OutputFormat};
pub use visitor::{NodeVisitor, RenderFault};
