//! Lexer
//!
//!     Converts raw text into a flat sequence of positioned tokens. Dispatch is on the first
//!     significant character:
//!
//!         `*` Heading    `@` Link     `&` Image       `"` Citation
//!         `//` Comment   `/` Meta     `$` Variable    `±` Anchor
//!         anything else: Text
//!
//!     A `/` is a Comment when the next character is also `/`, a Meta otherwise. Nothing else
//!     distinguishes the two.
//!
//!     Leading `\r`, `\t` and `\n` before a token are skipped. Each construct consumes its own
//!     trailing line terminator when it runs to the end of the line.
//!
//! Error Recovery
//!
//!     The lexer never aborts. When a construct is malformed the error is logged and recorded,
//!     then the lexer synchronizes: it skips one character and keeps skipping until a special
//!     dispatch character, a line terminator or the end of input. The faulty fragment produces
//!     no token.
//!
//!     The token sequence always ends with `EndOfInput`.

pub mod cursor;
pub mod tokenizers;

pub use cursor::Cursor;

use crate::artefact::diagnostics::LexerError;
use crate::artefact::token::Token;
use tracing::{debug, warn};

/// Characters that end a text run and may start a construct
pub const SPECIAL_CHARACTERS: [char; 10] = ['*', '@', '&', '"', '/', '±', '$', '\n', '\r', '\t'];

pub fn is_special(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(&c)
}

/// Tokens plus the errors recovered from while producing them
#[derive(Debug, Clone, Default)]
pub struct LexerOutput {
    pub tokens: Vec<Token>,
    pub errors: Vec<LexerError>,
}

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    errors: Vec<LexerError>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            errors: Vec::new(),
        }
    }

    pub fn tokenize(mut self) -> LexerOutput {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            if self.cursor.is_at_end() {
                break;
            }
            match self.scan_token() {
                Ok(token) => tokens.push(token),
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

        tokens.push(Token::end_of_input(self.cursor.position()));
        debug!(
            tokens = tokens.len(),
            errors = self.errors.len(),
            "lexing finished"
        );

        LexerOutput {
            tokens,
            errors: self.errors,
        }
    }

    fn scan_token(&mut self) -> Result<Token, LexerError> {
        use tokenizers::*;

        let start = self.cursor.position();
        let cursor = &mut self.cursor;
        match cursor.peek() {
            Some('*') => tokenize_heading(cursor, start),
            Some('@') => tokenize_link(cursor, start),
            Some('&') => tokenize_image(cursor, start),
            Some('"') => tokenize_citation(cursor, start),
            Some('/') if cursor.peek_next() == Some('/') => tokenize_comment(cursor, start),
            Some('/') => tokenize_meta(cursor, start),
            Some('$') => tokenize_variable(cursor, start),
            Some('±') => tokenize_anchor(cursor, start),
            _ => tokenize_text(cursor, start),
        }
    }

    fn synchronize(&mut self) {
        self.cursor.advance();
        while let Some(c) = self.cursor.peek() {
            if is_special(c) {
                break;
            }
            self.cursor.advance();
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.cursor.peek(), Some('\r' | '\t' | '\n')) {
            self.cursor.advance();
        }
    }
}

/// Tokenize `source`, logging and dropping malformed fragments
pub fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize().tokens
}

/// Tokenize `source`, also returning the recovered errors
pub fn lex_with_diagnostics(source: &str) -> LexerOutput {
    Lexer::new(source).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artefact::diagnostics::Position;
    use crate::artefact::token::TokenKind;

    fn kinds(tokens: &[Token]) -> Vec<&'static str> {
        tokens.iter().map(|t| t.kind.name()).collect()
    }

    #[test]
    fn test_empty_input_is_only_end_of_input() {
        let tokens = lex("");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_end_of_input());
        assert_eq!(tokens[0].position(), Position::new(1, 1));
    }

    #[test]
    fn test_mixed_line() {
        let tokens = lex("Some text with an @/inline link(https://example.com) and more text.");
        assert_eq!(kinds(&tokens), vec!["Text", "Link", "Text", "EndOfInput"]);
        assert_eq!(tokens[0].text(), "Some text with an ");
        assert_eq!(tokens[1].column, 19);
        assert_eq!(tokens[2].text(), " and more text.");
    }

    #[test]
    fn test_comment_versus_meta_disambiguation() {
        let tokens = lex("// a comment\n/ -(title) A title");
        assert_eq!(tokens[0].kind, TokenKind::Comment);
        assert_eq!(
            tokens[1].kind,
            TokenKind::Meta {
                name: "title".to_string()
            }
        );
        assert_eq!(tokens[1].position(), Position::new(2, 1));
    }

    #[test]
    fn test_whitespace_skipping_tracks_lines() {
        let tokens = lex("\n\n\t* Heading");
        assert_eq!(tokens[0].kind, TokenKind::Heading { level: 1 });
        assert_eq!(tokens[0].position(), Position::new(3, 2));
    }

    #[test]
    fn test_carriage_returns_are_skipped() {
        let tokens = lex("first\r\nsecond");
        assert_eq!(kinds(&tokens), vec!["Text", "Text", "EndOfInput"]);
        assert_eq!(tokens[0].text(), "first");
        assert_eq!(tokens[1].text(), "second");
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_error_is_recorded_and_fragment_dropped() {
        let output = lex_with_diagnostics("* \n* Valid heading");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(output.errors[0].message, "Expected heading content");
        assert_eq!(kinds(&output.tokens), vec!["Heading", "EndOfInput"]);
        assert_eq!(output.tokens[0].text(), "Valid heading");
        assert_eq!(output.tokens[0].line, 2);
    }

    #[test]
    fn test_synchronize_stops_at_next_special_character() {
        let output = lex_with_diagnostics("$oops trailing words @ Link (x)");
        assert_eq!(output.errors.len(), 1);
        assert_eq!(kinds(&output.tokens), vec!["Link", "EndOfInput"]);
    }

    #[test]
    fn test_is_special() {
        for c in SPECIAL_CHARACTERS {
            assert!(is_special(c));
        }
        assert!(!is_special('a'));
        assert!(!is_special(' '));
    }
}
