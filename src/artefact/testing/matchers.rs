//! Content matchers used by `NodeAssertion`

/// How an asserted string is compared with the node's actual one
#[derive(Debug, Clone, Copy)]
pub enum TextMatch<'e> {
    Exact(&'e str),
    StartsWith(&'e str),
    Contains(&'e str),
}

impl TextMatch<'_> {
    /// Panic with `context` unless `actual` satisfies the matcher
    pub fn assert(self, actual: &str, context: &str) {
        let (holds, relation, expected) = match self {
            TextMatch::Exact(expected) => (actual == expected, "be", expected),
            TextMatch::StartsWith(prefix) => (actual.starts_with(prefix), "start with", prefix),
            TextMatch::Contains(part) => (actual.contains(part), "contain", part),
        };
        assert!(
            holds,
            "{}: Expected '{}' to {} '{}'",
            context, actual, relation, expected
        );
    }
}
