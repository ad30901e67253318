//! Error types for the scanner.
//!
//! [`LexError`] is carried by error tokens; its `Display` output is the
//! message a consumer shows to the user. [`ConfigError`] covers loading a
//! [`LexerConfig`](crate::LexerConfig) from TOML.

use escan_util::diagnostic::{self, DiagnosticCode};
use thiserror::Error;

/// Why a token could not be scanned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// No production matches the remaining input
    #[error("unexpected end of input")]
    UnexpectedInput,

    /// `/*` without a matching `*/`
    #[error("unterminated multi-line comment")]
    UnterminatedComment,

    /// A quote without its closing quote
    #[error("did not reach end of string literal reached eof")]
    UnterminatedString,

    /// `` ` `` without a closing backtick or `${`
    #[error("did not reach end of template literal reached eof")]
    UnterminatedTemplate,

    /// A substitution tail without a closing backtick or `${`
    #[error("did not reach TemplateMiddle or TemplateTail but reached eof")]
    UnterminatedTemplateTail,

    /// A line terminator inside a regular expression literal
    #[error("regex can't have new lines")]
    RegexLineTerminator,

    /// End of input inside a regular expression literal
    #[error("regex did not close with '/'")]
    UnterminatedRegex,

    /// A raw control character inside a regular expression literal
    #[error("invalid character {0:?} in regex")]
    InvalidRegexChar(char),

    /// A numeric literal followed by a letter, or missing its digits
    #[error("bad number syntax: {0:?}")]
    BadNumber(String),
}

impl LexError {
    /// Diagnostic code reported alongside the error token.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnexpectedInput => diagnostic::E_LEXER_UNEXPECTED_CHAR,
            LexError::UnterminatedComment => diagnostic::E_LEXER_UNTERMINATED_COMMENT,
            LexError::UnterminatedString => diagnostic::E_LEXER_UNTERMINATED_STRING,
            LexError::UnterminatedTemplate | LexError::UnterminatedTemplateTail => {
                diagnostic::E_LEXER_UNTERMINATED_TEMPLATE
            },
            LexError::RegexLineTerminator | LexError::UnterminatedRegex => {
                diagnostic::E_LEXER_UNTERMINATED_REGEX
            },
            LexError::InvalidRegexChar(_) => diagnostic::E_LEXER_INVALID_REGEX,
            LexError::BadNumber(_) => diagnostic::E_LEXER_INVALID_NUMBER,
        }
    }
}

/// Failure to load a scanner configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The TOML text could not be parsed into a configuration
    #[error("Failed to parse lexer config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML
    #[error("Failed to serialize lexer config: {0}")]
    Serialize(#[from] toml::ser::Error),
}
