//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations:
//! byte ranges with line/column information ([`Span`]), the frozen
//! position stamped onto every token ([`SourcePosition`]), and a line
//! index over a named source text ([`SourceFile`]).
//!
//! # Examples
//!
//! ```
//! use escan_util::span::{SourcePosition, Span};
//!
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//!
//! let pos = SourcePosition::new("main.js", 10, 1, 5);
//! assert_eq!(pos.source_name(), "main.js");
//! ```

mod source_map;

pub use source_map::SourceFile;

use std::fmt;
use std::sync::Arc;

/// Source location span
///
/// A `Span` covers the byte range `start..end` of a source text. `line`
/// and `column` describe where `start` sits: lines are 1-based, columns
/// are 0-based and counted in code points.
///
/// # Examples
///
/// ```
/// use escan_util::span::Span;
///
/// let span = Span::new(10, 20, 1, 5);
/// assert_eq!(span.start, 10);
/// assert_eq!(span.end, 20);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number of `start` (1-based)
    pub line: u32,
    /// Column of `start` (0-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        debug_assert!(start <= end, "span start {start} is after end {end}");
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use escan_util::span::Span;
    ///
    /// let point = Span::point(4, 1, 4);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if the span covers no bytes
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of bytes covered by the span
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if `offset` falls inside `start..end`
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// The position of a token in its source text.
///
/// Computed when a token is emitted and never mutated afterwards.
/// `byte_offset` is the offset of the token's first byte; `line` is
/// 1-based and `column` is 0-based (in code points). The source name is
/// shared, so cloning a position never copies the name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SourcePosition {
    source_name: Arc<str>,
    /// Byte offset of the first byte of the token
    pub byte_offset: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (0-based, in code points)
    pub column: u32,
}

impl SourcePosition {
    /// Create a position in the named source
    pub fn new(source_name: impl Into<Arc<str>>, byte_offset: usize, line: u32, column: u32) -> Self {
        Self {
            source_name: source_name.into(),
            byte_offset,
            line,
            column,
        }
    }

    /// Name of the source this position points into
    #[inline]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Span of `len` bytes starting at this position
    ///
    /// # Examples
    ///
    /// ```
    /// use escan_util::span::SourcePosition;
    ///
    /// let pos = SourcePosition::new("a.js", 3, 1, 3);
    /// let span = pos.span(4);
    /// assert_eq!((span.start, span.end), (3, 7));
    /// ```
    #[inline]
    pub fn span(&self, len: usize) -> Span {
        Span::new(self.byte_offset, self.byte_offset + len, self.line, self.column)
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.source_name, self.line, self.column)
    }
}
