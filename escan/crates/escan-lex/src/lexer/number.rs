//! Numeric literal lexing.
//!
//! Recognized forms: `0x`/`0X` hex, `0o`/`0O` octal, `0b`/`0B` binary,
//! decimal integers, decimals with a fraction (`1.5`, `1.`, `.5`) and an
//! optional exponent (`1e10`, `2.5E-3`). When signed literals are enabled
//! a directly preceding `-` belongs to the literal. Values are not
//! computed; the lexeme is the token.

use crate::error::LexError;
use crate::token::TokenKind;
use crate::unicode::is_digit_in_base;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Returns true if a numeric literal starts at `c`, `next`.
    pub(crate) fn starts_numeric_literal(&self, c: char, next: Option<char>) -> bool {
        let is_digit = |c: Option<char>| c.is_some_and(|c| c.is_ascii_digit());
        match c {
            '0'..='9' => true,
            '.' => is_digit(next),
            '-' if self.config.signed_numeric_literals => {
                is_digit(next) || (next == Some('.') && is_digit(self.cursor.peek_nth(2)))
            },
            _ => false,
        }
    }

    /// Scans a numeric literal.
    ///
    /// A body followed directly by a letter, like `1o` or `0x1g`, is an
    /// error that includes the letter. So are a radix prefix or an
    /// exponent marker without digits.
    pub(crate) fn scan_numeric_literal(&mut self) -> Result<TokenKind, LexError> {
        self.cursor.eat('-');

        let radix = match (self.cursor.peek(), self.cursor.peek_nth(1)) {
            (Some('0'), Some('x' | 'X')) => Some(16),
            (Some('0'), Some('o' | 'O')) => Some(8),
            (Some('0'), Some('b' | 'B')) => Some(2),
            _ => None,
        };

        match radix {
            Some(base) => {
                self.cursor.advance();
                self.cursor.advance();
                if self.cursor.eat_while(|c| is_digit_in_base(c, base)) == 0 {
                    return self.bad_number();
                }
            },
            None => {
                self.cursor.eat_while(|c| c.is_ascii_digit());
                if self.cursor.eat('.') {
                    self.cursor.eat_while(|c| c.is_ascii_digit());
                }
                if self.cursor.eat_if(|c| c == 'e' || c == 'E').is_some() {
                    self.cursor.eat_if(|c| c == '+' || c == '-');
                    if self.cursor.eat_while(|c| c.is_ascii_digit()) == 0 {
                        return self.bad_number();
                    }
                }
            },
        }

        if self.cursor.peek().is_some_and(char::is_alphabetic) {
            return self.bad_number();
        }
        Ok(TokenKind::NumericLiteral)
    }

    /// Consumes an offending letter, if any, and fails with the lexeme.
    fn bad_number(&mut self) -> Result<TokenKind, LexError> {
        self.cursor.eat_if(char::is_alphabetic);
        Err(LexError::BadNumber(
            self.cursor.lexeme_since_mark().to_string(),
        ))
    }
}
