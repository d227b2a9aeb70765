//! Positioned diagnostics shared by every pipeline stage
//!
//!     Lexer and parser errors never leave their stage as `Err` values: each stage logs them,
//!     collects them and synchronizes. They are still plain error types so callers asking for
//!     diagnostics (see `lex_with_diagnostics` and `parse_with_diagnostics`) get structured data.
//!
//!     Interpreter errors are the only ones that propagate. They carry the kind and position of
//!     the node whose rendering failed, when that is known.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A 1-based line:column position in source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// A malformed construct found while tokenizing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("LexerError at line {}, column {}: {message}", .position.line, .position.column)]
pub struct LexerError {
    pub message: String,
    pub position: Position,
}

impl LexerError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

/// A token sequence the parser could not turn into a node
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ParserError at line {}, column {}: {message}", .position.line, .position.column)]
pub struct ParserError {
    pub message: String,
    pub position: Position,
}

impl ParserError {
    pub fn new(message: impl Into<String>, position: Position) -> Self {
        Self {
            message: message.into(),
            position,
        }
    }
}

/// A fatal failure while rendering a document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("InterpreterError: {message}{}", position_suffix(.position))]
pub struct InterpreterError {
    pub message: String,
    pub node_kind: Option<&'static str>,
    pub position: Option<Position>,
}

impl InterpreterError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            node_kind: None,
            position: None,
        }
    }

    /// Attach the kind and position of the node being rendered
    pub fn at_node(mut self, node_kind: &'static str, position: Position) -> Self {
        self.node_kind = Some(node_kind);
        self.position = Some(position);
        self
    }
}

fn position_suffix(position: &Option<Position>) -> String {
    match position {
        Some(position) => format!(" at line {}, column {}", position.line, position.column),
        None => String::new(),
    }
}

/// Errors raised when looking up output formats
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
}

/// Umbrella error for whole-pipeline operations
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Interpreter(#[from] InterpreterError),
    #[error(transparent)]
    Format(#[from] FormatError),
}
