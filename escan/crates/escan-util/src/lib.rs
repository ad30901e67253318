//! escan-util - Foundation types shared by the scanner and its consumers
//!
//! ============================================================================
//! MODULE OVERVIEW
//! ============================================================================
//!
//! The scanner in `escan-lex` turns ECMAScript source text into tokens. The
//! types it needs to describe *where* something happened, and *what went
//! wrong* there, live in this crate so that a parser built on top of the
//! scanner can use them too without depending on scanner internals.
//!
//! - [`span`]: byte ranges ([`Span`]), frozen token positions
//!   ([`SourcePosition`]) and a line index over a source ([`SourceFile`]).
//! - [`diagnostic`]: severity levels, diagnostic codes, a fluent builder and
//!   the [`Handler`](diagnostic::Handler) that collects reports.
//! - [`error`]: failures of the line index itself.
//
// ============================================================================
// POSITIONS
// ============================================================================
//
// Offsets are byte offsets into the UTF-8 source. Lines are 1-based and
// columns are 0-based code point counts, matching what the scanner's cursor
// tracks while decoding. A CR LF pair is one line break everywhere.

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{SourceMapError, SourceMapResult};
pub use span::{SourceFile, SourcePosition, Span};
