//! # artefact
//!
//! A lexer, parser and renderer for the artefact markup format.
//!
//! The crate is a three stage text pipeline:
//!
//!     text -> Lexer -> tokens -> Parser -> Document -> Interpreter -> HTML | Markdown
//!
//! Every stage is a plain function over owned or borrowed data. Lexing and parsing recover from
//! malformed fragments (they log, drop the fragment and keep going), rendering does not: a fault
//! while rendering a node aborts the whole render with an
//! [InterpreterError](artefact::diagnostics::InterpreterError).
//!
//! ```rust,ignore
//! use artefact::{parse, render, OutputFormat};
//!
//! let doc = parse("* Simple Heading");
//! let html = render(&doc, OutputFormat::Html)?;
//! assert_eq!(html, "<h1>Simple Heading</h1>");
//! ```
//!
//! For the testing helpers, see the [testing module](artefact::testing).

pub mod artefact;

pub use artefact::ast::{Document, Node};
pub use artefact::diagnostics::{Error, InterpreterError, LexerError, ParserError, Position};
pub use artefact::formats::OutputFormat;
pub use artefact::interpreter::render;
pub use artefact::lexing::lex;
pub use artefact::parsing::parse;
pub use artefact::token::{Token, TokenKind};
