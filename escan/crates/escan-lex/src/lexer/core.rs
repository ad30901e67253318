//! Core lexer implementation.
//!
//! This module contains the `Lexer` struct, its pull operations and the
//! bookkeeping shared by every production: token construction, error
//! reporting and the one-token look-ahead cache.

use std::cell::OnceCell;
use std::iter::FusedIterator;
use std::sync::Arc;

use escan_util::diagnostic::{Diagnostic, Handler, SourceSnippet};
use escan_util::{SourceFile, SourcePosition, Span};
use tracing::{debug, trace};

use crate::config::LexerConfig;
use crate::cursor::{Cursor, CursorSnapshot};
use crate::error::LexError;
use crate::goal::LexicalGoal;
use crate::keywords::ReservedWords;
use crate::token::{Token, TokenKind};

/// Goal-directed scanner for ECMAScript source text.
///
/// The caller supplies a [`LexicalGoal`] on every pull; the scanner keeps
/// no goal of its own between pulls. Malformed input never panics: it
/// produces an [`TokenKind::Error`] token, records a diagnostic, and the
/// next pull continues after the offending text.
///
/// # Example
///
/// ```
/// use escan_lex::{LexicalGoal, Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("main.js", "a / b", false);
/// let kinds: Vec<TokenKind> = lexer
///     .tokenize(LexicalGoal::Div)
///     .into_iter()
///     .map(|token| token.kind)
///     .collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::IdentifierName,
///         TokenKind::WhiteSpace,
///         TokenKind::DivPunctuator,
///         TokenKind::WhiteSpace,
///         TokenKind::IdentifierName,
///     ]
/// );
/// ```
pub struct Lexer<'a> {
    /// Code point cursor over the source text.
    pub(crate) cursor: Cursor<'a>,

    /// Reserved words for the configured mode.
    pub(crate) reserved: ReservedWords,

    /// Scanner options, fixed at construction.
    pub(crate) config: LexerConfig,

    /// Name of the source, as given to the constructor.
    name: &'a str,

    /// Shared copy of the name stamped onto token positions.
    source_name: Arc<str>,

    /// Collects a diagnostic for every error token.
    handler: Handler,

    /// Line index, built the first time an error needs a snippet.
    source_file: OnceCell<SourceFile<'a>>,

    /// Token scanned by `peek_token` and not yet consumed.
    peeked: Option<Peeked<'a>>,
}

/// A look-ahead token with the goal it was scanned under.
struct Peeked<'a> {
    goal: LexicalGoal,
    token: Token<'a>,
    /// Cursor state before the token was scanned
    before: CursorSnapshot,
    /// Diagnostics recorded before the token was scanned
    diagnostics: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a scanner over `source` with default options.
    ///
    /// `strict_mode` selects the strict mode reserved words and cannot be
    /// changed afterwards.
    pub fn new(source_name: &'a str, source: &'a str, strict_mode: bool) -> Self {
        Self::with_config(
            source_name,
            source,
            LexerConfig::default().strict_mode(strict_mode),
        )
    }

    /// Creates a scanner over `source` with explicit options.
    pub fn with_config(source_name: &'a str, source: &'a str, config: LexerConfig) -> Self {
        debug!(
            source = source_name,
            len = source.len(),
            strict = config.strict_mode,
            capture_trivia = config.capture_trivia,
            "creating lexer"
        );
        Self {
            cursor: Cursor::new(source),
            reserved: ReservedWords::new(config.strict_mode),
            config,
            name: source_name,
            source_name: Arc::from(source_name),
            handler: Handler::new(),
            source_file: OnceCell::new(),
            peeked: None,
        }
    }

    /// Consumes and returns the next token scanned under `goal`.
    ///
    /// A token cached by [`peek_token`](Lexer::peek_token) under the same
    /// goal is returned as is; one cached under a different goal is
    /// discarded and the input is scanned again.
    pub fn next_token(&mut self, goal: LexicalGoal) -> Token<'a> {
        if let Some(peeked) = self.peeked.take() {
            if peeked.goal == goal {
                return peeked.token;
            }
            self.discard(peeked);
        }
        self.scan(goal)
    }

    /// Returns the next token scanned under `goal` without consuming it.
    pub fn peek_token(&mut self, goal: LexicalGoal) -> &Token<'a> {
        let peeked = match self.peeked.take() {
            Some(peeked) if peeked.goal == goal => peeked,
            stale => {
                if let Some(stale) = stale {
                    self.discard(stale);
                }
                let before = self.cursor.snapshot();
                let diagnostics = self.handler.len();
                let token = self.scan(goal);
                Peeked {
                    goal,
                    token,
                    before,
                    diagnostics,
                }
            },
        };
        &self.peeked.insert(peeked).token
    }

    /// Scans every remaining token under `goal`, excluding the final
    /// `EndOfInput`.
    pub fn tokenize(&mut self, goal: LexicalGoal) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token(goal);
            if token.is_eof() {
                return tokens;
            }
            tokens.push(token);
        }
    }

    /// Undo a look-ahead: rewind the cursor and forget its diagnostics.
    fn discard(&mut self, peeked: Peeked<'a>) {
        trace!(goal = %peeked.goal, "discarding peeked token");
        self.cursor.restore(peeked.before);
        self.handler.truncate(peeked.diagnostics);
    }

    /// Scans one token, skipping trivia unless it is captured.
    fn scan(&mut self, goal: LexicalGoal) -> Token<'a> {
        loop {
            let token = self.scan_one(goal);
            if token.kind.is_trivia() && !self.config.capture_trivia {
                continue;
            }
            trace!(
                kind = %token.kind,
                offset = token.position.byte_offset,
                %goal,
                "token"
            );
            return token;
        }
    }

    fn scan_one(&mut self, goal: LexicalGoal) -> Token<'a> {
        self.cursor.mark();
        let start = self.cursor.snapshot();
        let production = self.classify(goal);
        let result = self.run(production);

        let lexeme = self.cursor.lexeme_since_mark();
        let position = SourcePosition::new(
            Arc::clone(&self.source_name),
            start.position,
            start.line,
            start.column,
        );

        match result {
            Ok(kind) => Token::new(kind, lexeme, position),
            Err(error) => {
                self.report(&error, start);
                Token::error(error, lexeme, position)
            },
        }
    }

    /// Records a diagnostic for an error token starting at `start`.
    fn report(&self, error: &LexError, start: CursorSnapshot) {
        let span = Span::new(start.position, self.cursor.position(), start.line, start.column);
        debug!(
            source = %self.source_name,
            line = span.line,
            column = span.column,
            %error,
            "lexical error"
        );

        let file = self
            .source_file
            .get_or_init(|| SourceFile::new(self.name, self.cursor.source()));
        let mut builder = self
            .handler
            .build_error(span, error.to_string())
            .code(error.code());
        if let Ok(snippet) = SourceSnippet::from_source(file, span) {
            builder = builder.snippet(snippet);
        }
        builder.emit(&self.handler);
    }

    /// Offset, line and column of the next unconsumed code point.
    ///
    /// A peeked token counts as unconsumed.
    pub fn current_position(&self) -> (usize, u32, u32) {
        let at = match &self.peeked {
            Some(peeked) => peeked.before,
            None => self.cursor.snapshot(),
        };
        (at.position, at.line, at.column)
    }

    /// Name of the source being scanned.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Whether strict mode reserved words are active.
    pub fn is_strict(&self) -> bool {
        self.config.strict_mode
    }

    /// The options this scanner was built with.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// The reserved words this scanner recognizes.
    pub fn reserved_words(&self) -> &ReservedWords {
        &self.reserved
    }

    /// The handler holding every diagnostic reported so far.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// Every diagnostic reported so far, in order.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.handler.diagnostics()
    }
}

/// Pulls tokens under [`LexicalGoal::Div`] until end of input.
///
/// `EndOfInput` itself is not yielded.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token(LexicalGoal::Div);
        (!token.is_eof()).then_some(token)
    }
}

impl FusedIterator for Lexer<'_> {}
