//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and [`SourceSnippet`] for the excerpt of
//! source text shown under a diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::error::SourceMapResult;
use crate::span::{SourceFile, Span};

/// One line of source text with an underlined column range
///
/// Columns are 0-based code point indices into `line`; `end_column` is
/// exclusive. `line_number` is 1-based.
///
/// # Examples
///
/// ```
/// use escan_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet::new("var x = 1o;", 1, 8, 10, Some("here"));
/// let text = snippet.format();
/// assert!(text.contains("var x = 1o;"));
/// assert!(text.ends_with("^^ here"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line, without its terminator
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// First underlined column (0-based)
    pub start_column: usize,
    /// One past the last underlined column
    pub end_column: usize,
    /// Text printed after the underline
    pub label: Option<String>,
}

impl SourceSnippet {
    pub fn new(
        line: impl Into<String>,
        line_number: usize,
        start_column: usize,
        end_column: usize,
        label: Option<impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into(),
            line_number,
            start_column,
            end_column: end_column.max(start_column),
            label: label.map(Into::into),
        }
    }

    /// A snippet pointing at a single column
    pub fn point(line: impl Into<String>, line_number: usize, column: usize) -> Self {
        Self::new(line, line_number, column, column, None::<String>)
    }

    /// Excerpt of the line on which `span` starts
    ///
    /// A span running past the end of its first line is underlined up to
    /// the end of that line.
    ///
    /// # Examples
    ///
    /// ```
    /// use escan_util::diagnostic::SourceSnippet;
    /// use escan_util::span::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("a.js", "a = 1;\nb = \"oops");
    /// let snippet = SourceSnippet::from_source(&file, Span::new(11, 16, 2, 4)).unwrap();
    /// assert_eq!(snippet.line, "b = \"oops");
    /// assert_eq!((snippet.start_column, snippet.end_column), (4, 9));
    /// ```
    pub fn from_source(file: &SourceFile<'_>, span: Span) -> SourceMapResult<Self> {
        let (line_number, start_column) = file.line_col(span.start)?;
        let text = file.line_text(line_number as usize)?;
        let width = file
            .content()
            .get(span.start..span.end)
            .map_or(0, |text| text.chars().count());
        let line_len = text.chars().count();
        let start_column = start_column as usize;
        let end_column = (start_column + width).min(line_len).max(start_column);

        Ok(Self::new(
            text,
            line_number as usize,
            start_column,
            end_column,
            None::<String>,
        ))
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Render the line with a caret underline
    pub fn format(&self) -> String {
        let gutter = self.line_number.to_string().len().max(3);
        let carets = (self.end_column - self.start_column).max(1);

        let mut out = format!("{:>gutter$} | {}\n", self.line_number, self.line);
        out.push_str(&format!("{:>gutter$} | ", ""));
        out.push_str(&" ".repeat(self.start_column));
        out.push_str(&"^".repeat(carets));
        if let Some(label) = &self.label {
            out.push(' ');
            out.push_str(label);
        }
        out
    }
}

/// Fluent construction of a [`Diagnostic`]
///
/// # Examples
///
/// ```
/// use escan_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Level};
/// use escan_util::Span;
///
/// let diag = DiagnosticBuilder::error("bad number syntax: \"1o\"")
///     .code(DiagnosticCode::E_LEXER_INVALID_NUMBER)
///     .span(Span::new(0, 2, 1, 0))
///     .help("separate the number from the identifier")
///     .build();
/// assert_eq!(diag.level, Level::Error);
/// assert_eq!(diag.helps.len(), 1);
/// ```
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
    snippets: Vec<SourceSnippet>,
}

impl DiagnosticBuilder {
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
            snippets: Vec::new(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    pub fn snippet(mut self, snippet: SourceSnippet) -> Self {
        self.snippets.push(snippet);
        self
    }

    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
            snippets: self.snippets,
        }
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &Handler) {
        handler.emit_diagnostic(self.build());
    }
}
