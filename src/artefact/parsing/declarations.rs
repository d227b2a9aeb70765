//! Variable declaration table
//!
//!     Filled in source order as declarations are parsed. A use is only valid when its name is
//!     already present, so a declaration that appears after the use does not count. Values are
//!     not kept here; binding a use to its value happens when the document is rendered.

use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct DeclarationTable {
    names: HashSet<String>,
}

impl DeclarationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
