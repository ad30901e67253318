//! Identifier and reserved word lexing.
//!
//! The whole identifier name is scanned first and only then looked up in
//! the reserved word table, so a keyword never matches the prefix of a
//! longer name.

use crate::token::TokenKind;
use crate::unicode::is_id_continue;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans an identifier name and classifies it.
    pub(crate) fn scan_identifier_name(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.eat_while(is_id_continue);

        if self.reserved.contains(self.cursor.lexeme_since_mark()) {
            TokenKind::ReservedWord
        } else {
            TokenKind::IdentifierName
        }
    }
}
