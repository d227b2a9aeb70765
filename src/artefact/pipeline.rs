//! Pipeline orchestration
//!
//! Runs text through lexing, parsing and rendering with a format looked up by name. Lexer and
//! parser diagnostics are logged by their stages; `inspect` returns them as data together with
//! the intermediate products.

use crate::artefact::ast::Document;
use crate::artefact::diagnostics::{Error, LexerError, ParserError};
use crate::artefact::formats::{FormatRegistry, OutputFormat};
use crate::artefact::lexing::lex_with_diagnostics;
use crate::artefact::parsing::{parse, Parser};
use crate::artefact::token::Token;
use tracing::debug;

/// Everything the first two stages produce for one source
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub tokens: Vec<Token>,
    pub document: Document,
    pub lexer_errors: Vec<LexerError>,
    pub parser_errors: Vec<ParserError>,
}

impl PipelineReport {
    pub fn has_errors(&self) -> bool {
        !self.lexer_errors.is_empty() || !self.parser_errors.is_empty()
    }
}

pub struct Pipeline {
    registry: FormatRegistry,
}

impl Pipeline {
    /// Create a pipeline with the built-in formats
    pub fn new() -> Self {
        Self {
            registry: FormatRegistry::with_defaults(),
        }
    }

    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Render `source` with the format registered as `format_name`.
    ///
    /// Aliases of the built-in formats (`md`) are accepted when no format with that exact name
    /// is registered.
    pub fn convert(&self, source: &str, format_name: &str) -> Result<String, Error> {
        let name = self.resolve_name(format_name);
        let format = self.registry.get(name)?;
        debug!(format = format.name(), "converting");

        let document = parse(source);
        self.registry.serialize(&document, name)
    }

    /// Lex and parse `source`, keeping tokens and diagnostics
    pub fn inspect(&self, source: &str) -> PipelineReport {
        let lexed = lex_with_diagnostics(source);
        let (document, parser_errors) = Parser::new(lexed.tokens.clone()).parse();
        PipelineReport {
            tokens: lexed.tokens,
            document,
            lexer_errors: lexed.errors,
            parser_errors,
        }
    }

    fn resolve_name<'a>(&self, format_name: &'a str) -> &'a str {
        if self.registry.has(format_name) {
            return format_name;
        }
        match format_name.parse::<OutputFormat>() {
            Ok(format) => format.name(),
            Err(_) => format_name,
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
