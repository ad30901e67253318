//! Goal-directed production selection.
//!
//! Every pull looks at the first few unconsumed code points once and picks
//! exactly one [`Production`]; the order of the arms in
//! [`Lexer::classify`] is the precedence order of the lexical grammar.
//! Only `/` and `}` depend on the goal.

use crate::error::LexError;
use crate::goal::LexicalGoal;
use crate::token::TokenKind;
use crate::unicode::{is_id_start, is_line_terminator, is_whitespace};
use crate::Lexer;

use super::punctuator::match_punctuator;

/// The production that will scan the next token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Production {
    WhiteSpace,
    LineTerminator,
    SingleLineComment,
    MultiLineComment,
    /// Identifier name, classified as a reserved word once complete
    IdentifierName,
    NumericLiteral,
    Punctuator(&'static str),
    Template,
    StringLiteral,
    /// `}` resuming a template literal
    TemplateContinuation,
    DivPunctuator,
    RightBrace,
    RegularExpression,
    Unexpected,
    EndOfInput,
}

impl<'a> Lexer<'a> {
    /// Picks the production for the next token without consuming input.
    pub(crate) fn classify(&self, goal: LexicalGoal) -> Production {
        let Some(c) = self.cursor.peek() else {
            return Production::EndOfInput;
        };
        let next = self.cursor.peek_nth(1);

        if is_whitespace(c) {
            return Production::WhiteSpace;
        }
        if is_line_terminator(c) {
            return Production::LineTerminator;
        }
        match (c, next) {
            ('/', Some('/')) => return Production::SingleLineComment,
            ('/', Some('*')) => return Production::MultiLineComment,
            _ => {},
        }
        if self.starts_numeric_literal(c, next) {
            return Production::NumericLiteral;
        }
        if let Some(punctuator) = match_punctuator(self.cursor.remaining()) {
            return Production::Punctuator(punctuator);
        }

        match c {
            c if is_id_start(c) => Production::IdentifierName,
            '`' => Production::Template,
            '"' | '\'' => Production::StringLiteral,
            '}' if goal.allows_template_tail() => Production::TemplateContinuation,
            '/' if goal.allows_div() => Production::DivPunctuator,
            '}' => Production::RightBrace,
            '/' if goal.allows_regex() => Production::RegularExpression,
            _ => Production::Unexpected,
        }
    }

    /// Runs `production`, consuming exactly one token's worth of input.
    pub(crate) fn run(&mut self, production: Production) -> Result<TokenKind, LexError> {
        match production {
            Production::WhiteSpace => Ok(self.scan_whitespace()),
            Production::LineTerminator => Ok(self.scan_line_terminator()),
            Production::SingleLineComment => Ok(self.scan_single_line_comment()),
            Production::MultiLineComment => self.scan_multi_line_comment(),
            Production::IdentifierName => Ok(self.scan_identifier_name()),
            Production::NumericLiteral => self.scan_numeric_literal(),
            Production::Punctuator(text) => Ok(self.scan_punctuator(text)),
            Production::Template => self.scan_template(),
            Production::StringLiteral => self.scan_string_literal(),
            Production::TemplateContinuation => self.scan_template_continuation(),
            Production::DivPunctuator => Ok(self.scan_div_punctuator()),
            Production::RightBrace => {
                self.cursor.advance();
                Ok(TokenKind::RightBracePunctuator)
            },
            Production::RegularExpression => self.scan_regular_expression(),
            Production::Unexpected => {
                self.cursor.advance();
                Err(LexError::UnexpectedInput)
            },
            Production::EndOfInput => Ok(TokenKind::EndOfInput),
        }
    }
}
