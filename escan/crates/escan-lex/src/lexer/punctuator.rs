//! Punctuator lexing.
//!
//! The fixed punctuators are matched longest first, so `>>>=` wins over
//! `>>=`, `>>` and `>`. `/`, `/=` and `}` are not in the table: what they
//! mean depends on the lexical goal, and the dispatcher routes them here
//! (division) or elsewhere (regex, template) accordingly.

use crate::token::TokenKind;
use crate::Lexer;

/// Fixed punctuators, in strictly non-increasing length order.
pub const PUNCTUATORS: &[&str] = &[
    ">>>=",
    "<<=", "!==", "===", ">>>", "...", ">>=",
    ">=", "%=", "*=", "-=", "<=", "&=", "==", "!=", "|=", "^=", "+=", "<<", "||", "&&", "++",
    "--", "=>", ">>",
    "{", "(", ")", ";", "]", "[", ",", ".", "-", "&", "|", "^", "!", "~", "%", "*", "?", ":",
    "=", "+", ">", "<",
];

/// Returns the longest fixed punctuator `text` starts with.
///
/// # Examples
///
/// ```
/// use escan_lex::lexer::match_punctuator;
///
/// assert_eq!(match_punctuator(">>>=1"), Some(">>>="));
/// assert_eq!(match_punctuator(">> 1"), Some(">>"));
/// assert_eq!(match_punctuator("/="), None);
/// assert_eq!(match_punctuator("}"), None);
/// ```
pub fn match_punctuator(text: &str) -> Option<&'static str> {
    PUNCTUATORS.iter().copied().find(|p| text.starts_with(p))
}

impl<'a> Lexer<'a> {
    /// Consumes a punctuator already matched by the dispatcher.
    pub(crate) fn scan_punctuator(&mut self, text: &'static str) -> TokenKind {
        self.cursor.eat_str(text);
        TokenKind::Punctuator
    }

    /// Scans `/=` or `/` as a division punctuator.
    pub(crate) fn scan_div_punctuator(&mut self) -> TokenKind {
        if !self.cursor.eat_str("/=") {
            self.cursor.advance();
        }
        TokenKind::DivPunctuator
    }
}
