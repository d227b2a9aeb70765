//! Format trait definition
//!
//! A format is a visitor plus the few document level decisions the interpreter leaves to it:
//! how rendered blocks are joined and how an anchor attaches to the block before it.

use super::visitor::NodeVisitor;

/// Trait for output formats
///
/// # Examples
///
/// ```ignore
/// struct PlainFormat;
///
/// impl NodeVisitor for PlainFormat { /* one rule per node kind */ }
///
/// impl Format for PlainFormat {
///     fn name(&self) -> &str {
///         "plain"
///     }
///
///     fn block_separator(&self) -> &str {
///         "\n"
///     }
///
///     fn attach_anchor(&self, rendered: &str, _slug: &str) -> String {
///         rendered.to_string()
///     }
/// }
/// ```
pub trait Format: NodeVisitor + Send + Sync {
    /// The name of this format (e.g., "html", "markdown")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// File extensions for this format, without the dot
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Placed between rendered blocks
    fn block_separator(&self) -> &str;

    /// Mark `rendered` (the block before an anchor) as the target `slug`
    fn attach_anchor(&self, rendered: &str, slug: &str) -> String;
}
