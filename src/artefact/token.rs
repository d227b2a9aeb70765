//! Token types produced by the lexer
//!
//!     A token is the minimal positioned unit of lexical meaning. Tokens are produced once, in
//!     source order, and never mutated. The last token of every lexer run is `EndOfInput`.
//!
//!     Kind specific data (heading level, link url, meta name...) lives in the `TokenKind`
//!     variant; the trimmed textual payload lives in `content`.

use super::diagnostics::Position;
use serde::Serialize;
use std::fmt;

/// The kind of a token, with its kind specific fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum TokenKind {
    Heading { level: u8 },
    Link { is_inline: bool, url: String },
    Image { source: String },
    Citation { is_author: bool },
    Comment,
    Meta { name: String },
    VariableDeclaration { name: String },
    /// `is_usage` is always set; it tells a use apart from a declaration in serialized views
    VariableUse { is_usage: bool },
    Anchor,
    Text,
    EndOfInput,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Heading { .. } => "Heading",
            TokenKind::Link { .. } => "Link",
            TokenKind::Image { .. } => "Image",
            TokenKind::Citation { .. } => "Citation",
            TokenKind::Comment => "Comment",
            TokenKind::Meta { .. } => "Meta",
            TokenKind::VariableDeclaration { .. } => "VariableDeclaration",
            TokenKind::VariableUse { .. } => "VariableUse",
            TokenKind::Anchor => "Anchor",
            TokenKind::Text => "Text",
            TokenKind::EndOfInput => "EndOfInput",
        }
    }

    /// Kinds the parser may resume at after an error.
    ///
    /// Text and variable uses are deliberately absent: they only continue a paragraph.
    pub fn starts_block(&self) -> bool {
        matches!(
            self,
            TokenKind::Heading { .. }
                | TokenKind::Link { .. }
                | TokenKind::Image { .. }
                | TokenKind::Citation { .. }
                | TokenKind::Comment
                | TokenKind::Meta { .. }
                | TokenKind::VariableDeclaration { .. }
                | TokenKind::Anchor
        )
    }
}

/// A positioned token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(flatten)]
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position, content: impl Into<String>) -> Self {
        Self {
            kind,
            line: position.line,
            column: position.column,
            content: Some(content.into()),
        }
    }

    pub fn end_of_input(position: Position) -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            line: position.line,
            column: position.column,
            content: None,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// The token content, or an empty string for content-less tokens
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.content {
            Some(content) => write!(
                f,
                "{}({:?}) at {}",
                self.kind.name(),
                content,
                self.position()
            ),
            None => write!(f, "{} at {}", self.kind.name(), self.position()),
        }
    }
}
