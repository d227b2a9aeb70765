//! Token to node dispatch
//!
//! The parser walks the token sequence once. Each token kind maps to exactly one node kind,
//! with a single exception: a Citation may absorb the author citation (`" ->`) that follows it.
//!
//! On error the parser records and logs the diagnostic, then skips tokens until one that can
//! start a block. Text and variable uses are never resume points, so the remainder of a broken
//! paragraph is dropped along with the faulty node.

use super::declarations::DeclarationTable;
use crate::artefact::ast::{
    Anchor, Citation, Comment, Document, Heading, Image, Link, Meta, Node, Text,
    VariableDeclaration, VariableUse,
};
use crate::artefact::diagnostics::ParserError;
use crate::artefact::lexing::tokenizers::MAX_HEADING_LEVEL;
use crate::artefact::token::{Token, TokenKind};
use tracing::{debug, warn};

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    declarations: DeclarationTable,
    errors: Vec<ParserError>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            current: 0,
            declarations: DeclarationTable::new(),
            errors: Vec::new(),
        }
    }

    /// Build the document, returning it with every error recovered from
    pub fn parse(mut self) -> (Document, Vec<ParserError>) {
        let mut children = Vec::new();

        while !self.is_at_end() {
            match self.parse_node() {
                Ok(Some(node)) => children.push(node),
                Ok(None) => {}
                Err(error) => {
                    warn!(
                        line = error.position.line,
                        column = error.position.column,
                        "{}",
                        error
                    );
                    self.errors.push(error);
                    self.synchronize();
                }
            }
        }

        debug!(
            nodes = children.len(),
            declarations = self.declarations.len(),
            errors = self.errors.len(),
            "parsing finished"
        );
        (Document::new(children), self.errors)
    }

    fn parse_node(&mut self) -> Result<Option<Node>, ParserError> {
        let Some(token) = self.advance() else {
            return Ok(None);
        };
        let position = token.position();
        let content = token.content.clone().unwrap_or_default();

        let node: Node = match token.kind {
            TokenKind::Heading { level } => {
                if !(1..=MAX_HEADING_LEVEL).contains(&level) {
                    return Err(ParserError::new(
                        format!("Invalid heading level: {}", level),
                        position,
                    ));
                }
                Heading::new(level, content).at(position).into()
            }
            TokenKind::Link { is_inline, url } => {
                Link::new(content, url, is_inline).at(position).into()
            }
            TokenKind::Image { source } => Image::new(content, source).at(position).into(),
            TokenKind::Citation { .. } => self.parse_citation(content).at(position).into(),
            TokenKind::Comment => Comment::new(content).at(position).into(),
            TokenKind::Meta { name } => Meta::new(name, content).at(position).into(),
            TokenKind::VariableDeclaration { name } => {
                self.declarations.declare(name.clone());
                VariableDeclaration::new(name, content).at(position).into()
            }
            TokenKind::VariableUse { .. } => {
                if !self.declarations.is_declared(&content) {
                    return Err(ParserError::new(
                        format!("Undeclared variable: {}", content),
                        position,
                    ));
                }
                VariableUse::new(content).at(position).into()
            }
            TokenKind::Anchor => Anchor::new(content).at(position).into(),
            TokenKind::Text => Text::new(content).at(position).into(),
            TokenKind::EndOfInput => return Ok(None),
        };

        Ok(Some(node))
    }

    /// A citation optionally followed by its author line
    fn parse_citation(&mut self, content: String) -> Citation {
        let citation = Citation::new(content);
        match self.peek() {
            Some(Token {
                kind: TokenKind::Citation { is_author: true },
                ..
            }) => {
                let author = self.advance().and_then(|t| t.content).unwrap_or_default();
                citation.with_author(author)
            }
            _ => citation,
        }
    }

    fn synchronize(&mut self) {
        while let Some(token) = self.peek() {
            if token.is_end_of_input() || token.kind.starts_block() {
                return;
            }
            self.current += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.peek().map_or(true, Token::is_end_of_input)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.current)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.current).cloned();
        if token.is_some() {
            self.current += 1;
        }
        token
    }
}
