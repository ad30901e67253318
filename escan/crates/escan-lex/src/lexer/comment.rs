//! Comment lexing.
//!
//! Comments are tokens like any other; the caller decides whether to see
//! them through `LexerConfig::capture_trivia`.

use crate::error::LexError;
use crate::token::TokenKind;
use crate::unicode::is_line_terminator;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans `//` up to, not including, the next line terminator.
    pub(crate) fn scan_single_line_comment(&mut self) -> TokenKind {
        self.cursor.eat_str("//");
        self.cursor.eat_while(|c| !is_line_terminator(c));
        TokenKind::SingleLineComment
    }

    /// Scans `/*` through the first `*/`.
    ///
    /// Comments do not nest. Reaching end of input first consumes the rest
    /// of the source into an error token.
    pub(crate) fn scan_multi_line_comment(&mut self) -> Result<TokenKind, LexError> {
        self.cursor.eat_str("/*");
        loop {
            if self.cursor.eat_str("*/") {
                return Ok(TokenKind::MultiLineComment);
            }
            if self.cursor.advance().is_none() {
                return Err(LexError::UnterminatedComment);
            }
        }
    }
}
