//! String literal lexing.
//!
//! Strings are scanned, not decoded. A backslash is ordinary content: the
//! literal ends at the first matching quote, so `"a\"b"` is the literal
//! `"a\"` followed by `b` and a new, unclosed string.

use crate::error::LexError;
use crate::token::TokenKind;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a single- or double-quoted string literal.
    ///
    /// An unclosed string consumes the rest of the input into one error
    /// token; no partial literal is produced.
    pub(crate) fn scan_string_literal(&mut self) -> Result<TokenKind, LexError> {
        let Some(quote) = self.cursor.advance() else {
            return Err(LexError::UnterminatedString);
        };

        loop {
            match self.cursor.advance() {
                None => return Err(LexError::UnterminatedString),
                Some(c) if c == quote => return Ok(TokenKind::StringLiteral),
                Some(_) => {},
            }
        }
    }
}
