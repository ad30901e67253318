//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! The scanner never aborts on malformed input. Besides returning an error
//! token it records a [`Diagnostic`] in a [`Handler`], which a consumer can
//! inspect once tokenization is over.
//!
//! # Examples
//!
//! ```
//! use escan_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use escan_util::Span;
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("did not reach end of string literal reached eof")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .span(Span::new(0, 4, 1, 0))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;
pub use codes::{
    E_LEXER_INVALID_NUMBER, E_LEXER_INVALID_REGEX, E_LEXER_UNEXPECTED_CHAR,
    E_LEXER_UNTERMINATED_COMMENT, E_LEXER_UNTERMINATED_REGEX, E_LEXER_UNTERMINATED_STRING,
    E_LEXER_UNTERMINATED_TEMPLATE,
};

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// Diagnostic severity level
///
/// # Examples
///
/// ```
/// use escan_util::diagnostic::Level;
///
/// assert_eq!(format!("{}", Level::Error), "error");
/// assert_eq!(format!("{}", Level::Warning), "warning");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    /// Malformed input
    Error,
    /// Suspicious but accepted input
    Warning,
    /// Additional information about a diagnostic
    Note,
    /// A suggestion for fixing an issue
    Help,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
            Level::Help => "help",
        };
        f.write_str(name)
    }
}

/// A diagnostic message with severity and location
#[derive(Clone, Debug)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
    /// Source excerpts for display
    pub snippets: Vec<SourceSnippet>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            message: message.into(),
            span,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn with_snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }
}

impl fmt::Display for Diagnostic {
    /// Renders `level[code]: message`, then every snippet, note and help.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => writeln!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => writeln!(f, "{}: {}", self.level, self.message)?,
        }
        for snippet in &self.snippets {
            writeln!(f, "{}", snippet.format())?;
        }
        for note in &self.notes {
            writeln!(f, "  = note: {}", note)?;
        }
        for help in &self.helps {
            writeln!(f, "  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Collects diagnostics emitted while scanning
///
/// All methods take `&self`; the scanner owns one handler and lends it out
/// to consumers without giving up mutable access to itself.
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a handler that records diagnostics
    pub fn new() -> Self {
        Self {
            diagnostics: RefCell::new(Vec::new()),
        }
    }

    /// Record a diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Start building an error at `span`
    pub fn build_error(&self, span: Span, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message).span(span)
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level == Level::Error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == Level::Error)
            .count()
    }

    /// Snapshot of every recorded diagnostic, in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Number of recorded diagnostics of any level
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Drop every diagnostic recorded after the first `len`
    pub fn truncate(&self, len: usize) {
        self.diagnostics.borrow_mut().truncate(len);
    }

    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("diagnostics", &self.diagnostics.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_display() {
        assert_eq!(format!("{}", Level::Error), "error");
        assert_eq!(format!("{}", Level::Warning), "warning");
        assert_eq!(format!("{}", Level::Note), "note");
        assert_eq!(format!("{}", Level::Help), "help");
    }

    #[test]
    fn test_diagnostic_builders() {
        let diag = Diagnostic::error("bad", Span::DUMMY)
            .with_code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
            .with_note("note 1")
            .with_help("help 1");
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.code, Some(E_LEXER_INVALID_NUMBER));
        assert_eq!(diag.notes, vec!["note 1"]);
        assert_eq!(diag.helps, vec!["help 1"]);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::error("regex can't have new lines", Span::DUMMY)
            .with_code(E_LEXER_UNTERMINATED_REGEX)
            .with_help("close the literal with '/'");
        let rendered = diag.to_string();
        assert!(rendered.starts_with("error[E1006]: regex can't have new lines\n"));
        assert!(rendered.contains("  = help: close the literal with '/'"));

        let plain = Diagnostic::warning("w", Span::DUMMY).to_string();
        assert_eq!(plain, "warning: w\n");
    }

    #[test]
    fn test_handler_new() {
        let handler = Handler::new();
        assert!(!handler.has_errors());
        assert_eq!(handler.error_count(), 0);
        assert!(handler.is_empty());
    }

    #[test]
    fn test_handler_counts() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("e1", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::warning("w1", Span::DUMMY));
        handler.emit_diagnostic(Diagnostic::error("e2", Span::DUMMY));

        assert!(handler.has_errors());
        assert_eq!(handler.error_count(), 2);
        assert_eq!(handler.len(), 3);

        let messages: Vec<_> = handler
            .diagnostics()
            .into_iter()
            .map(|d| d.message)
            .collect();
        assert_eq!(messages, vec!["e1", "w1", "e2"]);
    }

    #[test]
    fn test_handler_clear() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::error("test", Span::DUMMY));
        handler.clear();
        assert!(!handler.has_errors());
        assert!(handler.diagnostics().is_empty());
    }

    #[test]
    fn test_handler_truncate() {
        let handler = Handler::new();
        handler.emit_diagnostic(Diagnostic::warning("keep", Span::DUMMY));
        let mark = handler.len();
        handler.emit_diagnostic(Diagnostic::error("discard", Span::DUMMY));
        handler.truncate(mark);
        assert_eq!(handler.len(), 1);
        assert!(!handler.has_errors());
        assert!(!handler.is_empty());
    }

    #[test]
    fn test_handler_build_error() {
        let handler = Handler::new();
        handler
            .build_error(Span::new(3, 4, 1, 3), "unexpected end of input")
            .code(E_LEXER_UNEXPECTED_CHAR)
            .emit(&handler);

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].code, Some(E_LEXER_UNEXPECTED_CHAR));
        assert_eq!(diags[0].span.start, 3);
    }
}
