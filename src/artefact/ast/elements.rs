//! Leaf node types
//!
//!     One struct per node kind. Each carries the position of its first lexed character;
//!     nodes built by hand default to 1:1 and can be placed with `at(position)`.

use crate::artefact::diagnostics::Position;

macro_rules! positioned {
    ($($ty:ident),* $(,)?) => {
        $(
            impl $ty {
                /// Preferred builder: `at(position)`
                pub fn at(mut self, position: Position) -> Self {
                    self.position = position;
                    self
                }
            }
        )*
    };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub level: u8,
    pub content: String,
    pub position: Position,
}

impl Heading {
    pub fn new(level: u8, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
            position: Position::default(),
        }
    }
}

/// A hyperlink. Inline links (`@/`) flow inside text; block links (`@`) stand alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub content: String,
    pub url: String,
    pub is_inline: bool,
    pub position: Position,
}

impl Link {
    pub fn new(content: impl Into<String>, url: impl Into<String>, is_inline: bool) -> Self {
        Self {
            content: content.into(),
            url: url.into(),
            is_inline,
            position: Position::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub content: String,
    pub source: String,
    pub position: Position,
}

impl Image {
    pub fn new(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
            position: Position::default(),
        }
    }
}

/// A quotation, optionally attributed by a following `" ->` line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Citation {
    pub content: String,
    pub author: Option<String>,
    pub position: Position,
}

impl Citation {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: None,
            position: Position::default(),
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub content: String,
    pub position: Position,
}

impl Comment {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            position: Position::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    pub name: String,
    pub content: String,
    pub position: Position,
}

impl Meta {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            position: Position::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub content: String,
    pub position: Position,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            position: Position::default(),
        }
    }
}

/// A named target other nodes can link to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub content: String,
    pub position: Position,
}

impl Anchor {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            position: Position::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub name: String,
    pub content: String,
    pub position: Position,
}

impl VariableDeclaration {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            position: Position::default(),
        }
    }
}

/// A reference to a previously declared variable; `content` is the variable name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableUse {
    pub content: String,
    pub position: Position,
}

impl VariableUse {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            content: name.into(),
            position: Position::default(),
        }
    }
}

positioned!(
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
