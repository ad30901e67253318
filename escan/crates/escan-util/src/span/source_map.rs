//! Line index over a named source text.
//!
//! This module provides the [`SourceFile`] type, which borrows a source
//! text and precomputes where each line starts so that byte offsets can be
//! turned back into line/column coordinates for diagnostics.

use crate::error::{SourceMapError, SourceMapResult};

/// A named source text with a precomputed line index
///
/// Lines are split on the four ECMAScript line terminators (LF, CR,
/// U+2028, U+2029); a CR immediately followed by LF counts as a single
/// line break.
///
/// # Examples
///
/// ```
/// use escan_util::span::SourceFile;
///
/// let file = SourceFile::new("main.js", "let a;\nlet b;");
/// assert_eq!(file.name(), "main.js");
/// assert_eq!(file.line_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct SourceFile<'a> {
    name: &'a str,
    content: &'a str,
    /// Byte offset of the first byte of every line
    line_starts: Vec<usize>,
}

impl<'a> SourceFile<'a> {
    /// Create a source file and index its lines
    pub fn new(name: &'a str, content: &'a str) -> Self {
        Self {
            name,
            content,
            line_starts: Self::compute_line_starts(content),
        }
    }

    fn compute_line_starts(content: &str) -> Vec<usize> {
        let mut starts = vec![0];
        let mut chars = content.char_indices().peekable();

        while let Some((i, ch)) = chars.next() {
            match ch {
                '\r' => {
                    if let Some(&(j, '\n')) = chars.peek() {
                        chars.next();
                        starts.push(j + 1);
                    } else {
                        starts.push(i + 1);
                    }
                },
                '\n' | '\u{2028}' | '\u{2029}' => starts.push(i + ch.len_utf8()),
                _ => {},
            }
        }

        starts
    }

    /// Get the source name
    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Get the source text
    #[inline]
    pub fn content(&self) -> &'a str {
        self.content
    }

    /// Total number of lines
    ///
    /// An empty source has one (empty) line; a trailing line terminator
    /// opens a new, empty last line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte offset where a 1-based line starts
    ///
    /// # Examples
    ///
    /// ```
    /// use escan_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.js", "x\r\ny");
    /// assert_eq!(file.line_start(2).unwrap(), 3);
    /// assert!(file.line_start(3).is_err());
    /// ```
    pub fn line_start(&self, line: usize) -> SourceMapResult<usize> {
        line.checked_sub(1)
            .and_then(|index| self.line_starts.get(index).copied())
            .ok_or(SourceMapError::InvalidLineNumber {
                line,
                max_lines: self.line_count(),
            })
    }

    /// Text of a 1-based line, without its terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use escan_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.js", "first\nsecond\n");
    /// assert_eq!(file.line_text(2).unwrap(), "second");
    /// assert_eq!(file.line_text(3).unwrap(), "");
    /// ```
    pub fn line_text(&self, line: usize) -> SourceMapResult<&'a str> {
        let start = self.line_start(line)?;
        let end = self
            .line_starts
            .get(line)
            .copied()
            .unwrap_or(self.content.len());

        let text = &self.content[start..end];
        Ok(text.trim_end_matches(['\n', '\r', '\u{2028}', '\u{2029}']))
    }

    /// Convert a byte offset into a 1-based line and 0-based column
    ///
    /// The column counts code points from the start of the line. The
    /// offset must lie on a character boundary; `content().len()` itself is
    /// accepted and maps to the end of the last line.
    ///
    /// # Examples
    ///
    /// ```
    /// use escan_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("a.js", "let x;\nfoo(x);");
    /// assert_eq!(file.line_col(7).unwrap(), (2, 0));
    /// assert_eq!(file.line_col(11).unwrap(), (2, 4));
    /// ```
    pub fn line_col(&self, byte_offset: usize) -> SourceMapResult<(u32, u32)> {
        if byte_offset > self.content.len() {
            return Err(SourceMapError::OffsetOutOfBounds {
                offset: byte_offset,
                len: self.content.len(),
            });
        }
        if !self.content.is_char_boundary(byte_offset) {
            return Err(SourceMapError::NotCharBoundary {
                offset: byte_offset,
            });
        }

        let index = match self.line_starts.binary_search(&byte_offset) {
            Ok(exact) => exact,
            Err(insert) => insert - 1,
        };
        let line_start = self.line_starts[index];
        let column = self.content[line_start..byte_offset].chars().count();

        Ok((index as u32 + 1, column as u32))
    }
}
