//! White space and line terminators.

use crate::token::TokenKind;
use crate::unicode::is_whitespace;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans a maximal run of white space.
    pub(crate) fn scan_whitespace(&mut self) -> TokenKind {
        self.cursor.eat_while(is_whitespace);
        TokenKind::WhiteSpace
    }

    /// Scans exactly one line terminator code point.
    ///
    /// CR LF is two tokens; the cursor still counts it as one line break.
    pub(crate) fn scan_line_terminator(&mut self) -> TokenKind {
        self.cursor.advance();
        TokenKind::LineTerminator
    }
}
