//! Lexer module.
//!
//! The scanner is split by production:
//! - `core` - the `Lexer` struct, the pull API and error reporting
//! - `dispatch` - picks one production per pull from the input and goal
//! - `whitespace` - white space runs and line terminators
//! - `comment` - single- and multi-line comments
//! - `identifier` - identifier names and reserved words
//! - `number` - numeric literals
//! - `string` - string literals
//! - `template` - template literal pieces
//! - `regex` - regular expression literals
//! - `punctuator` - the punctuator table and division punctuators

mod comment;
mod core;
mod dispatch;
mod identifier;
mod number;
mod punctuator;
mod regex;
mod string;
mod template;
mod whitespace;

pub use self::core::Lexer;
pub use punctuator::{match_punctuator, PUNCTUATORS};
