//! Parser
//!
//!     Converts a token sequence into a [Document]. The parser accepts either raw text, which it
//!     lexes first, or a pre-lexed token sequence. See [ParserInput].
//!
//!     Like the lexer, the parser never aborts: malformed nodes are logged, recorded and skipped.
//!     `parse` returns only the document; `parse_with_diagnostics` also hands back the errors of
//!     both stages.
//!
//! Declarations
//!
//!     Variable declarations are recorded in a per-parse [DeclarationTable]. A `$/name` use is
//!     an error ("Undeclared variable: name") unless `name` was declared earlier in the source.

pub mod declarations;
pub mod parser;

pub use declarations::DeclarationTable;
pub use parser::Parser;

use crate::artefact::ast::Document;
use crate::artefact::diagnostics::{LexerError, ParserError};
use crate::artefact::lexing::lex_with_diagnostics;
use crate::artefact::token::Token;

/// What the parser can start from
#[derive(Debug, Clone)]
pub enum ParserInput<'a> {
    /// Raw text, lexed before parsing
    Source(&'a str),
    /// An already lexed token sequence
    Tokens(Vec<Token>),
}

impl<'a> From<&'a str> for ParserInput<'a> {
    fn from(source: &'a str) -> Self {
        ParserInput::Source(source)
    }
}

impl<'a> From<&'a String> for ParserInput<'a> {
    fn from(source: &'a String) -> Self {
        ParserInput::Source(source.as_str())
    }
}

impl From<Vec<Token>> for ParserInput<'_> {
    fn from(tokens: Vec<Token>) -> Self {
        ParserInput::Tokens(tokens)
    }
}

/// A document plus the diagnostics of every stage that produced it
#[derive(Debug, Clone, Default)]
pub struct ParserOutput {
    pub document: Document,
    pub lexer_errors: Vec<LexerError>,
    pub parser_errors: Vec<ParserError>,
}

impl ParserOutput {
    pub fn has_errors(&self) -> bool {
        !self.lexer_errors.is_empty() || !self.parser_errors.is_empty()
    }
}

/// Parse text or tokens into a document, logging and dropping malformed nodes
pub fn parse<'a>(input: impl Into<ParserInput<'a>>) -> Document {
    parse_with_diagnostics(input).document
}

pub fn parse_with_diagnostics<'a>(input: impl Into<ParserInput<'a>>) -> ParserOutput {
    let (tokens, lexer_errors) = match input.into() {
        ParserInput::Source(source) => {
            let output = lex_with_diagnostics(source);
            (output.tokens, output.errors)
        }
        ParserInput::Tokens(tokens) => (tokens, Vec::new()),
    };

    let (document, parser_errors) = Parser::new(tokens).parse();
    ParserOutput {
        document,
        lexer_errors,
        parser_errors,
    }
}
