//! Lexical goal symbols.
//!
//! The same input can scan differently depending on what the parser
//! expects next: `/` divides after an expression but starts a regular
//! expression literal where an expression begins, and `}` either closes a
//! block or resumes a template literal. The parser picks a [`LexicalGoal`]
//! on every pull to say which reading it wants.

use std::fmt;

/// Which ambiguous productions are allowed for the next token.
///
/// | goal                   | `/` reads as | `}` reads as       |
/// |------------------------|--------------|--------------------|
/// | `Div`                  | division     | right brace        |
/// | `RegExp`               | regex        | right brace        |
/// | `RegExpOrTemplateTail` | regex        | template tail      |
/// | `TemplateTail`         | division     | template tail      |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LexicalGoal {
    /// `InputElementDiv`
    #[default]
    Div,
    /// `InputElementRegExp`
    RegExp,
    /// `InputElementRegExpOrTemplateTail`
    RegExpOrTemplateTail,
    /// `InputElementTemplateTail`
    TemplateTail,
}

impl LexicalGoal {
    /// All goals, in declaration order.
    pub const ALL: [LexicalGoal; 4] = [
        LexicalGoal::Div,
        LexicalGoal::RegExp,
        LexicalGoal::RegExpOrTemplateTail,
        LexicalGoal::TemplateTail,
    ];

    /// Returns true if `/` starts a regular expression literal.
    #[inline]
    pub fn allows_regex(self) -> bool {
        matches!(self, LexicalGoal::RegExp | LexicalGoal::RegExpOrTemplateTail)
    }

    /// Returns true if `/` and `/=` are division punctuators.
    #[inline]
    pub fn allows_div(self) -> bool {
        matches!(self, LexicalGoal::Div | LexicalGoal::TemplateTail)
    }

    /// Returns true if `}` resumes a template literal.
    #[inline]
    pub fn allows_template_tail(self) -> bool {
        matches!(self, LexicalGoal::RegExpOrTemplateTail | LexicalGoal::TemplateTail)
    }
}

impl fmt::Display for LexicalGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LexicalGoal::Div => "InputElementDiv",
            LexicalGoal::RegExp => "InputElementRegExp",
            LexicalGoal::RegExpOrTemplateTail => "InputElementRegExpOrTemplateTail",
            LexicalGoal::TemplateTail => "InputElementTemplateTail",
        };
        f.write_str(name)
    }
}
