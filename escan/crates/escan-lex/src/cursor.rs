//! Code point cursor over a source text.
//!
//! This module provides the [`Cursor`] struct which decodes the source one
//! Unicode code point at a time and keeps line/column information up to
//! date for token positions. End of input is `None`, so accept loops over
//! [`Cursor::peek`] stop at the end without special-casing it.

use crate::unicode::is_line_terminator;

/// A cursor for traversing source text code point by code point.
///
/// Besides the current offset the cursor remembers a *mark* (the start of
/// the lexeme under construction) and the state before the most recent
/// [`advance`](Cursor::advance), so that exactly one code point can be
/// un-read with [`backup`](Cursor::backup).
///
/// # Example
///
/// ```
/// use escan_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x");
/// cursor.mark();
/// assert_eq!(cursor.advance(), Some('l'));
/// assert_eq!(cursor.advance(), Some('e'));
/// assert_eq!(cursor.advance(), Some('t'));
/// assert_eq!(cursor.lexeme_since_mark(), "let");
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (0-based, in code points).
    column: u32,

    /// Byte position where the current lexeme started.
    mark: usize,

    /// State before the last `advance`, consumed by `backup`.
    previous: Option<CursorSnapshot>,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 0,
            mark: 0,
            previous: None,
        }
    }

    /// Returns the next code point without consuming it.
    ///
    /// # Example
    ///
    /// ```
    /// use escan_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("é!");
    /// assert_eq!(cursor.peek(), Some('é'));
    /// assert_eq!(Cursor::new("").peek(), None);
    /// ```
    #[inline]
    pub fn peek(&self) -> Option<char> {
        let bytes = self.source.as_bytes();
        match bytes.get(self.position) {
            None => None,
            // Fast path for ASCII
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => self.remaining().chars().next(),
        }
    }

    /// Returns the code point `n` positions ahead (0 = next) without
    /// consuming anything.
    #[inline]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    /// Consumes one code point and returns it.
    ///
    /// A line terminator moves to the next line and resets the column;
    /// a CR immediately followed by LF only advances the column, so the
    /// pair counts as a single line break. At end of input nothing changes
    /// and `None` is returned.
    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.previous = Some(self.snapshot());
        self.position += c.len_utf8();

        let crlf = c == '\r' && self.peek() == Some('\n');
        if is_line_terminator(c) && !crlf {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    /// Undoes the most recent [`advance`](Cursor::advance).
    ///
    /// Only one code point can be un-read; calling `backup` twice without
    /// an `advance` in between is a bug in the caller.
    pub fn backup(&mut self) {
        debug_assert!(
            self.previous.is_some(),
            "Cursor::backup called without a preceding advance"
        );
        if let Some(snapshot) = self.previous.take() {
            self.restore(snapshot);
        }
    }

    /// Consumes the next code point if it equals `expected`.
    ///
    /// # Example
    ///
    /// ```
    /// use escan_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("=>");
    /// assert!(cursor.eat('='));
    /// assert!(!cursor.eat('='));
    /// assert_eq!(cursor.peek(), Some('>'));
    /// ```
    #[inline]
    pub fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the next code point if it satisfies `predicate`.
    #[inline]
    pub fn eat_if(&mut self, predicate: impl FnOnce(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(c) if predicate(c) => self.advance(),
            _ => None,
        }
    }

    /// Consumes code points while `predicate` holds; returns how many.
    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) -> usize {
        let mut count = 0;
        while self.eat_if(&mut predicate).is_some() {
            count += 1;
        }
        count
    }

    /// Consumes `text` if the remaining input starts with it.
    ///
    /// `text` must not contain a line terminator.
    pub fn eat_str(&mut self, text: &str) -> bool {
        if !self.starts_with(text) {
            return false;
        }
        for _ in text.chars() {
            self.advance();
        }
        true
    }

    /// Returns true if the remaining input starts with `text`.
    #[inline]
    pub fn starts_with(&self, text: &str) -> bool {
        self.remaining().starts_with(text)
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Starts a new lexeme at the current position.
    #[inline]
    pub fn mark(&mut self) {
        self.mark = self.position;
        self.previous = None;
    }

    /// Byte position of the current mark.
    #[inline]
    pub fn mark_position(&self) -> usize {
        self.mark
    }

    /// Source text consumed since the last [`mark`](Cursor::mark).
    #[inline]
    pub fn lexeme_since_mark(&self) -> &'a str {
        self.slice_from(self.mark)
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (0-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Source text from `start` to the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }

    /// The full source text.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Captures the current position, line and column.
    #[inline]
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Returns to a previously captured state.
    ///
    /// The single-step backup history is cleared.
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
        self.previous = None;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (0-based).
    pub column: u32,
}
