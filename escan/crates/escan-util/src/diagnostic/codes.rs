//! Diagnostic codes for categorizing scanner errors.
//!
//! Every diagnostic the scanner reports carries a [`DiagnosticCode`] so
//! that consumers can filter or document specific failures.
//!
//! # Examples
//!
//! ```
//! use escan_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.as_str(), "E1002");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes render as `{prefix}{number}` with the number padded to four
/// digits, so `DiagnosticCode::new("W", 7)` renders as `W0007`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix ("E" for errors, "W" for warnings)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: Input no production can classify
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: String literal not closed before end of input
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Malformed numeric literal
    pub const E_LEXER_INVALID_NUMBER: Self = Self::new("E", 1003);
    /// E1004: Multi-line comment not closed before end of input
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1004);
    /// E1005: Template literal not closed before end of input
    pub const E_LEXER_UNTERMINATED_TEMPLATE: Self = Self::new("E", 1005);
    /// E1006: Regular expression literal not closed on its line
    pub const E_LEXER_UNTERMINATED_REGEX: Self = Self::new("E", 1006);
    /// E1007: Disallowed character in a regular expression literal
    pub const E_LEXER_INVALID_REGEX: Self = Self::new("E", 1007);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub const E_LEXER_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
pub const E_LEXER_UNTERMINATED_STRING: DiagnosticCode = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
pub const E_LEXER_INVALID_NUMBER: DiagnosticCode = DiagnosticCode::E_LEXER_INVALID_NUMBER;
pub const E_LEXER_UNTERMINATED_COMMENT: DiagnosticCode = DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT;
pub const E_LEXER_UNTERMINATED_TEMPLATE: DiagnosticCode = DiagnosticCode::E_LEXER_UNTERMINATED_TEMPLATE;
pub const E_LEXER_UNTERMINATED_REGEX: DiagnosticCode = DiagnosticCode::E_LEXER_UNTERMINATED_REGEX;
pub const E_LEXER_INVALID_REGEX: DiagnosticCode = DiagnosticCode::E_LEXER_INVALID_REGEX;
