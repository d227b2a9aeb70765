//! Per-construct tokenizing rules
//!
//!     Each function is entered with the cursor on the construct's dispatch character and the
//!     position of that character in `start`. It either returns one token or a `LexerError`
//!     positioned at the first offending character; recovery is the lexer's job.
//!
//!     Shapes:
//!
//!         Heading        1-6 `*`, ` `, content to end of line
//!         Link           `@` [`/`] text `(` url `)`
//!         Image          `& -- ` text `(` source `)`
//!         Citation       `" -- ` content   |   `" -> ` author
//!         Comment        `//` content
//!         Meta           `/ -(` name `) ` content
//!         Variable       `$ ` name `= ` content   |   `$/` identifier
//!         Anchor         `± -(` name `)`
//!         Text           run of non-special characters
//!
//!     All captured text is trimmed, except Text which keeps its surrounding spaces so it can
//!     flow around inline constructs.

use super::cursor::Cursor;
use super::is_special;
use crate::artefact::diagnostics::{LexerError, Position};
use crate::artefact::token::{Token, TokenKind};

pub const MAX_HEADING_LEVEL: u8 = 6;

pub fn tokenize_heading(cursor: &mut Cursor<'_>, start: Position) -> Result<Token, LexerError> {
    let mut level: u8 = 0;
    while cursor.peek() == Some('*') && level < MAX_HEADING_LEVEL {
        cursor.advance();
        level += 1;
    }

    if cursor.peek() == Some('*') {
        let offending = cursor.position();
        let extra = cursor.take_while(|c| c == '*').chars().count();
        return Err(LexerError::new(
            format!("Invalid heading level: {}", level as usize + extra),
            offending,
        ));
    }
    if level == 0 {
        return Err(cursor.error("Invalid heading level: 0"));
    }
    if cursor.peek() != Some(' ') {
        return Err(cursor.error("Expected space after heading stars"));
    }
    cursor.advance();

    let content_start = cursor.position();
    let content = cursor.take_line().trim();
    if content.is_empty() {
        return Err(LexerError::new("Expected heading content", content_start));
    }
    cursor.finish_line();

    Ok(Token::new(TokenKind::Heading { level }, start, content))
}

pub fn tokenize_link(cursor: &mut Cursor<'_>, start: Position) -> Result<Token, LexerError> {
    cursor.advance(); // @
    let is_inline = cursor.peek() == Some('/');
    if is_inline {
        cursor.advance();
    }

    let text = cursor.take_until('(').trim();
    cursor.expect('(')?;
    let url = cursor.take_until(')').trim().to_string();
    cursor.expect(')')?;

    Ok(Token::new(TokenKind::Link { is_inline, url }, start, text))
}

pub fn tokenize_image(cursor: &mut Cursor<'_>, start: Position) -> Result<Token, LexerError> {
    cursor.advance(); // &
    cursor.expect_literal(" -- ")?;

    let text = cursor.take_until('(').trim();
    cursor.expect('(')?;
    let source = cursor.take_until(')').trim().to_string();
    cursor.expect(')')?;

    Ok(Token::new(TokenKind::Image { source }, start, text))
}

pub fn tokenize_citation(cursor: &mut Cursor<'_>, start: Position) -> Result<Token, LexerError> {
    cursor.advance(); // "
    cursor.expect(' ')?;
    cursor.expect('-')?;

    let is_author = cursor.peek() == Some('>');
    if is_author {
        cursor.advance();
    } else {
        cursor.expect('-')?;
    }
    cursor.expect(' ')?;

    let content = cursor.take_line().trim();
    cursor.finish_line();

    Ok(Token::new(TokenKind::Citation { is_author }, start, content))
}

pub fn tokenize_comment(cursor: &mut Cursor<'_>, start: Position) -> Result<Token, LexerError> {
    cursor.advance();
    cursor.advance();

    let content = cursor.take_line().trim();
    cursor.finish_line();

    Ok(Token::new(TokenKind::Comment, start, content))
}

pub fn tokenize_meta(cursor: &mut Cursor<'_>, start: Position) -> Result<Token, LexerError> {
    cursor.advance(); // /
    cursor.expect_literal(" -(")?;

    let name = cursor.take_until(')').trim().to_string();
    cursor.expect(')')?;
    cursor.expect(' ')?;

    let content = cursor.take_line().trim();
    cursor.finish_line();

    Ok(Token::new(TokenKind::Meta { name }, start, content))
}

/// `$ name = content` declares, `$/name` uses
pub fn tokenize_variable(cursor: &mut Cursor<'_>, start: Position) -> Result<Token, LexerError> {
    cursor.advance(); // $

    match cursor.peek() {
        Some(' ') => {
            cursor.advance();
            let name = cursor.take_until('=').trim().to_string();
            cursor.expect('=')?;
            cursor.expect(' ')?;

            let content = cursor.take_line().trim();
            cursor.finish_line();

            Ok(Token::new(
                TokenKind::VariableDeclaration { name },
                start,
                content,
            ))
        }
        Some('/') => {
            cursor.advance();
            let name = cursor.take_while(is_identifier_char);
            if name.is_empty() {
                return Err(cursor.error("Expected variable name after '$/'"));
            }
            Ok(Token::new(
                TokenKind::VariableUse { is_usage: true },
                start,
                name,
            ))
        }
        _ => Err(cursor.error("Invalid variable syntax")),
    }
}

pub fn tokenize_anchor(cursor: &mut Cursor<'_>, start: Position) -> Result<Token, LexerError> {
    cursor.advance(); // ±
    cursor.expect_literal(" -(")?;

    let name = cursor.take_until(')').trim();
    cursor.expect(')')?;

    Ok(Token::new(TokenKind::Anchor, start, name))
}

/// Fallback: a maximal run of non-special characters, or exactly one character
pub fn tokenize_text(cursor: &mut Cursor<'_>, start: Position) -> Result<Token, LexerError> {
    let run = cursor.take_while(|c| !is_special(c));
    let value = if run.is_empty() {
        cursor.advance().map(String::from).unwrap_or_default()
    } else {
        run.to_string()
    };

    Ok(Token::new(TokenKind::Text, start, value))
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
