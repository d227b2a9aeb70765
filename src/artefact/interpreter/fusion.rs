//! Merging an inline node into the block before it

use once_cell::sync::Lazy;
use regex::Regex;

/// A rendering made of one element, `<tag attrs>inner</tag>`, on a single line.
/// The closing tag is captured separately and compared, the regex crate has no backreferences.
static SINGLE_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^<(\w+)([^>]*)>(.*)</(\w+)>$").expect("single element pattern is valid")
});

static PARAGRAPH_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"</?p>").expect("paragraph tag pattern is valid"));

/// Fuse the three renderings of an inline window.
///
/// When `previous` is a single element the other two are moved inside it and any paragraph
/// tags they brought along are dropped. Otherwise the three are concatenated.
pub fn fuse_inline(previous: &str, current: &str, next: &str) -> String {
    if let Some(caps) = SINGLE_ELEMENT.captures(previous) {
        let (tag, attributes, inner, closing) = (&caps[1], &caps[2], &caps[3], &caps[4]);
        if tag == closing {
            let merged = format!("{}{}{}", inner, current, next);
            let cleaned = PARAGRAPH_TAG.replace_all(&merged, "");
            return format!("<{}{}>{}</{}>", tag, attributes, cleaned, tag);
        }
    }
    format!("{}{}{}", previous, current, next)
}

/// A block link keeps its own line between its neighbours
pub fn stack_blocks(previous: &str, current: &str, next: &str) -> String {
    [previous, current, next]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
