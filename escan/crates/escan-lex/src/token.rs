//! Token definitions.
//!
//! A [`Token`] is an immutable value: its kind, the exact source text it
//! was scanned from, and the position where that text starts. Nothing is
//! decoded at this layer; a string literal's lexeme still has its quotes
//! and any backslashes.

use std::fmt;

use escan_util::SourcePosition;

use crate::error::LexError;

/// Classification of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Malformed input; see [`Token::error`]
    Error,
    /// No input remains
    EndOfInput,
    /// `/* ... */`
    MultiLineComment,
    /// `// ...`, without the line terminator
    SingleLineComment,
    /// A run of white space code points
    WhiteSpace,
    /// Exactly one line terminator code point
    LineTerminator,
    /// An identifier that is not a reserved word
    IdentifierName,
    /// A keyword, future reserved word or `null`/`true`/`false`
    ReservedWord,
    /// Any punctuator except `}` and the division operators
    Punctuator,
    /// A `}` that closes a block or object literal
    RightBracePunctuator,
    /// `/` or `/=`
    DivPunctuator,
    /// A number, including its sign when signed literals are enabled
    NumericLiteral,
    /// A single- or double-quoted string
    StringLiteral,
    /// `` `...` `` with no substitutions
    NoSubstitutionTemplate,
    /// `` `...${ ``
    TemplateHead,
    /// `}...${`
    TemplateMiddle,
    /// `` }...` ``
    TemplateTail,
    /// `/body/flags`
    RegularExpressionLiteral,
}

impl TokenKind {
    /// Returns true for white space and comments.
    ///
    /// Line terminators are significant to automatic semicolon insertion
    /// and are not trivia.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::WhiteSpace | TokenKind::SingleLineComment | TokenKind::MultiLineComment
        )
    }

    /// Returns true for the template literal pieces.
    #[inline]
    pub fn is_template(self) -> bool {
        matches!(
            self,
            TokenKind::NoSubstitutionTemplate
                | TokenKind::TemplateHead
                | TokenKind::TemplateMiddle
                | TokenKind::TemplateTail
        )
    }

    /// Grammar name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Error => "Error",
            TokenKind::EndOfInput => "EndOfInput",
            TokenKind::MultiLineComment => "MultiLineComment",
            TokenKind::SingleLineComment => "SingleLineComment",
            TokenKind::WhiteSpace => "WhiteSpace",
            TokenKind::LineTerminator => "LineTerminator",
            TokenKind::IdentifierName => "IdentifierName",
            TokenKind::ReservedWord => "ReservedWord",
            TokenKind::Punctuator => "Punctuator",
            TokenKind::RightBracePunctuator => "RightBracePunctuator",
            TokenKind::DivPunctuator => "DivPunctuator",
            TokenKind::NumericLiteral => "NumericLiteral",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::NoSubstitutionTemplate => "NoSubstitutionTemplate",
            TokenKind::TemplateHead => "TemplateHead",
            TokenKind::TemplateMiddle => "TemplateMiddle",
            TokenKind::TemplateTail => "TemplateTail",
            TokenKind::RegularExpressionLiteral => "RegularExpressionLiteral",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A scanned token.
///
/// `lexeme` borrows the source text. For an error token it is the text the
/// failing production consumed, so concatenating every lexeme always
/// reproduces the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    /// Classification
    pub kind: TokenKind,
    /// Exact source text of the token
    pub lexeme: &'a str,
    /// Where `lexeme` starts
    pub position: SourcePosition,
    /// Why scanning failed, for [`TokenKind::Error`] tokens
    pub error: Option<LexError>,
}

impl<'a> Token<'a> {
    /// Create a well-formed token.
    pub fn new(kind: TokenKind, lexeme: &'a str, position: SourcePosition) -> Self {
        Self {
            kind,
            lexeme,
            position,
            error: None,
        }
    }

    /// Create an error token covering `lexeme`.
    pub fn error(error: LexError, lexeme: &'a str, position: SourcePosition) -> Self {
        Self {
            kind: TokenKind::Error,
            lexeme,
            position,
            error: Some(error),
        }
    }

    /// Returns true for [`TokenKind::Error`].
    #[inline]
    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// Returns true for [`TokenKind::EndOfInput`].
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    /// Human-readable error message, for error tokens.
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            Some(error) => write!(f, "<{} {:?}>", self.kind, error.to_string()),
            None => write!(f, "<{} {:?}>", self.kind, self.lexeme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos() -> SourcePosition {
        SourcePosition::new("t.js", 0, 1, 0)
    }

    #[test]
    fn test_trivia_kinds() {
        assert!(TokenKind::WhiteSpace.is_trivia());
        assert!(TokenKind::SingleLineComment.is_trivia());
        assert!(TokenKind::MultiLineComment.is_trivia());
        assert!(!TokenKind::LineTerminator.is_trivia());
        assert!(!TokenKind::Punctuator.is_trivia());
    }

    #[test]
    fn test_template_kinds() {
        assert!(TokenKind::TemplateHead.is_template());
        assert!(TokenKind::TemplateTail.is_template());
        assert!(!TokenKind::StringLiteral.is_template());
    }

    #[test]
    fn test_display() {
        let token = Token::new(TokenKind::Punctuator, ">>>=", pos());
        assert_eq!(token.to_string(), r#"<Punctuator ">>>=">"#);
        assert_eq!(TokenKind::RegularExpressionLiteral.to_string(), "RegularExpressionLiteral");
    }

    #[test]
    fn test_error_token() {
        let token = Token::error(LexError::UnterminatedString, "\"abc", pos());
        assert!(token.is_error());
        assert!(!token.is_eof());
        assert_eq!(
            token.message().as_deref(),
            Some("did not reach end of string literal reached eof")
        );
        assert_eq!(
            token.to_string(),
            r#"<Error "did not reach end of string literal reached eof">"#
        );
    }

    #[test]
    fn test_ok_token_has_no_message() {
        let token = Token::new(TokenKind::EndOfInput, "", pos());
        assert!(token.is_eof());
        assert_eq!(token.message(), None);
    }
}
