//! escan-lex - Goal-directed lexical scanner for ECMAScript
//!
//! This crate turns ECMAScript source text into a stream of classified
//! tokens. It is meant to be driven by a parser: every pull names the
//! [`LexicalGoal`] the parser is in, which settles the two ambiguities the
//! lexical grammar cannot settle on its own.
//!
//! - `/` is division after an expression and starts a regular expression
//!   literal where an expression may begin.
//! - `}` closes a block, or resumes a template literal after a
//!   substitution.
//!
//! # Example Usage
//!
//! ```
//! use escan_lex::{LexicalGoal, Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("main.js", "x = /ab+c/g", false);
//!
//! assert_eq!(lexer.next_token(LexicalGoal::RegExp).kind, TokenKind::IdentifierName);
//! assert_eq!(lexer.next_token(LexicalGoal::Div).kind, TokenKind::WhiteSpace);
//! assert_eq!(lexer.next_token(LexicalGoal::Div).lexeme, "=");
//! assert_eq!(lexer.next_token(LexicalGoal::RegExp).kind, TokenKind::WhiteSpace);
//!
//! let regex = lexer.next_token(LexicalGoal::RegExp);
//! assert_eq!(regex.kind, TokenKind::RegularExpressionLiteral);
//! assert_eq!(regex.lexeme, "/ab+c/g");
//! assert!(lexer.next_token(LexicalGoal::Div).is_eof());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`goal`] - Lexical goal symbols
//! - [`lexer`] - The scanner and its productions
//! - [`cursor`] - Code point cursor with line/column tracking
//! - [`unicode`] - Character classes
//! - [`keywords`] - Reserved word tables
//! - [`config`] - Scanner options
//! - [`error`] - Error types
//!
//! # Errors
//!
//! Malformed input never panics. It yields a [`TokenKind::Error`] token
//! whose lexeme is the text that was consumed and whose
//! [`message`](Token::message) says what went wrong; the same error is
//! recorded as a diagnostic in the scanner's
//! [`Handler`](escan_util::Handler). The next pull resumes after the
//! consumed text, and the concatenation of all lexemes is always the
//! original source.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod error;
pub mod goal;
pub mod keywords;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

pub use config::LexerConfig;
pub use cursor::Cursor;
pub use error::{ConfigError, LexError};
pub use goal::LexicalGoal;
pub use keywords::ReservedWords;
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
