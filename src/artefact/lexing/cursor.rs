//! Character cursor over the source text
//!
//!     Tracks the byte offset together with a 1-based line and column. Columns count
//!     characters, not bytes, so multi-byte characters such as `±` advance the column by one.

use crate::artefact::diagnostics::{LexerError, Position};

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.source.len()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn peek(&self) -> Option<char> {
        self.source[self.offset..].chars().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.offset..].chars();
        chars.next();
        chars.next()
    }

    /// Consume one character. A `\n` moves to column 1 of the next line.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Build an error positioned at the current character
    pub fn error(&self, message: impl Into<String>) -> LexerError {
        LexerError::new(message, self.position())
    }

    /// Consume `expected` or fail at the offending character
    pub fn expect(&mut self, expected: char) -> Result<(), LexerError> {
        match self.peek() {
            Some(found) if found == expected => {
                self.advance();
                Ok(())
            }
            Some(found) => Err(self.error(format!(
                "Expected '{}' but found '{}'",
                expected,
                found.escape_default()
            ))),
            None => Err(self.error(format!(
                "Expected '{}' but reached end of input",
                expected
            ))),
        }
    }

    pub fn expect_literal(&mut self, literal: &str) -> Result<(), LexerError> {
        literal.chars().try_for_each(|c| self.expect(c))
    }

    /// Consume characters while `predicate` holds, returning the consumed slice
    pub fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'a str {
        let source = self.source;
        let start = self.offset;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
        &source[start..self.offset]
    }

    /// Consume up to (not including) `stop`, never crossing a line terminator
    pub fn take_until(&mut self, stop: char) -> &'a str {
        self.take_while(|c| c != stop && c != '\n')
    }

    /// Consume the rest of the current line, leaving the `\n` in place
    pub fn take_line(&mut self) -> &'a str {
        self.take_while(|c| c != '\n')
    }

    /// Consume the line terminator ending the current construct, if present
    pub fn finish_line(&mut self) {
        if self.peek() == Some('\n') {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_tracks_lines_and_columns() {
        let mut cursor = Cursor::new("ab\ncd");
        assert_eq!(cursor.position(), Position::new(1, 1));
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), Position::new(1, 3));
        assert_eq!(cursor.advance(), Some('\n'));
        assert_eq!(cursor.position(), Position::new(2, 1));
        cursor.advance();
        assert_eq!(cursor.position(), Position::new(2, 2));
    }

    #[test]
    fn test_multibyte_characters_count_one_column() {
        let mut cursor = Cursor::new("± x");
        assert_eq!(cursor.advance(), Some('±'));
        assert_eq!(cursor.offset(), 2);
        assert_eq!(cursor.position(), Position::new(1, 2));
        assert_eq!(cursor.peek(), Some(' '));
    }

    #[test]
    fn test_peek_next() {
        let cursor = Cursor::new("//");
        assert_eq!(cursor.peek(), Some('/'));
        assert_eq!(cursor.peek_next(), Some('/'));
        assert_eq!(Cursor::new("/").peek_next(), None);
    }

    #[test]
    fn test_expect_reports_offending_character() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        let err = cursor.expect('(').unwrap_err();
        assert_eq!(err.message, "Expected '(' but found 'b'");
        assert_eq!(err.position, Position::new(1, 2));
    }

    #[test]
    fn test_expect_at_end_of_input() {
        let mut cursor = Cursor::new("");
        let err = cursor.expect(')').unwrap_err();
        assert_eq!(err.message, "Expected ')' but reached end of input");
    }

    #[test]
    fn test_take_until_stops_at_line_end() {
        let mut cursor = Cursor::new("text\n(url)");
        assert_eq!(cursor.take_until('('), "text");
        assert_eq!(cursor.peek(), Some('\n'));
    }

    #[test]
    fn test_take_line_and_finish_line() {
        let mut cursor = Cursor::new("  content  \nnext");
        assert_eq!(cursor.take_line(), "  content  ");
        cursor.finish_line();
        assert_eq!(cursor.position(), Position::new(2, 1));
        assert_eq!(cursor.peek(), Some('n'));
    }
}
