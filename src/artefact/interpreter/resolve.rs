//! String level passes run on the assembled output

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

static VARIABLE_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{(\w+)\}").expect("placeholder pattern is valid"));

static LINK_TARGET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<a href="([^"]+)">"#).expect("link target pattern is valid"));

/// Lowercase, spaces to hyphens. Nothing else is normalized.
pub fn slugify(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}

/// Replace every `${name}` with its declared value; unknown names stay as written
pub fn resolve_variables(content: &str, variables: &HashMap<String, String>) -> String {
    VARIABLE_PLACEHOLDER
        .replace_all(content, |caps: &Captures| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Point `<a href="X">` at `#slug(X)` when `slug(X)` names a collected anchor
pub fn resolve_anchors(content: &str, anchors: &HashMap<String, String>) -> String {
    LINK_TARGET
        .replace_all(content, |caps: &Captures| {
            let slug = slugify(&caps[1]);
            if anchors.contains_key(&slug) {
                format!("<a href=\"#{}\">", slug)
            } else {
                caps[0].to_string()
            }
        })
        .into_owned()
}
