//! Template literal lexing.
//!
//! A template literal with substitutions arrives as several tokens:
//!
//! ```text
//! `a${x}b${y}c`
//! ^^^^        TemplateHead      `a${
//!      ^^^^^  TemplateMiddle    }b${
//!          ^^^ TemplateTail     }c`
//! ```
//!
//! The scanner keeps no nesting state. After the expression inside a
//! substitution the parser asks for the next token with a goal that
//! allows a template tail, and the `}` then resumes the literal.

use crate::error::LexError;
use crate::token::TokenKind;
use crate::Lexer;

/// How a template body was terminated.
enum TemplateEnd {
    Backtick,
    Substitution,
}

impl<'a> Lexer<'a> {
    /// Scans from an opening backtick.
    pub(crate) fn scan_template(&mut self) -> Result<TokenKind, LexError> {
        self.cursor.advance();
        match self.scan_template_body() {
            Some(TemplateEnd::Backtick) => Ok(TokenKind::NoSubstitutionTemplate),
            Some(TemplateEnd::Substitution) => Ok(TokenKind::TemplateHead),
            None => Err(LexError::UnterminatedTemplate),
        }
    }

    /// Scans from the `}` that closes a substitution.
    pub(crate) fn scan_template_continuation(&mut self) -> Result<TokenKind, LexError> {
        self.cursor.advance();
        match self.scan_template_body() {
            Some(TemplateEnd::Backtick) => Ok(TokenKind::TemplateTail),
            Some(TemplateEnd::Substitution) => Ok(TokenKind::TemplateMiddle),
            None => Err(LexError::UnterminatedTemplateTail),
        }
    }

    /// Consumes template characters through the closing backtick or `${`.
    ///
    /// Returns `None` at end of input.
    fn scan_template_body(&mut self) -> Option<TemplateEnd> {
        loop {
            match self.cursor.advance()? {
                '`' => return Some(TemplateEnd::Backtick),
                '$' if self.cursor.eat('{') => return Some(TemplateEnd::Substitution),
                // `\`` and `\${` do not end the literal
                '\\' => {
                    self.cursor.advance()?;
                },
                _ => {},
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{LexicalGoal, Lexer, Token, TokenKind};

    fn lex_tpl(source: &str, goal: LexicalGoal) -> Token<'_> {
        Lexer::new("t.js", source, false).next_token(goal)
    }

    #[test]
    fn test_no_substitution() {
        let token = lex_tpl("`hello`", LexicalGoal::Div);
        assert_eq!(token.kind, TokenKind::NoSubstitutionTemplate);
        assert_eq!(token.lexeme, "`hello`");

        assert_eq!(lex_tpl("``", LexicalGoal::Div).lexeme, "``");
    }

    #[test]
    fn test_template_head() {
        let token = lex_tpl("`Hello ${name}`", LexicalGoal::Div);
        assert_eq!(token.kind, TokenKind::TemplateHead);
        assert_eq!(token.lexeme, "`Hello ${");
    }

    #[test]
    fn test_dollar_without_brace_is_text() {
        let token = lex_tpl("`$5 and $`", LexicalGoal::Div);
        assert_eq!(token.kind, TokenKind::NoSubstitutionTemplate);
        assert_eq!(token.lexeme, "`$5 and $`");
    }

    #[test]
    fn test_escapes_and_newlines() {
        let token = lex_tpl("`a\\`b\\${c}\nd`", LexicalGoal::Div);
        assert_eq!(token.kind, TokenKind::NoSubstitutionTemplate);
        assert_eq!(token.lexeme, "`a\\`b\\${c}\nd`");
    }

    #[test]
    fn test_middle_and_tail() {
        let token = lex_tpl("} b ${", LexicalGoal::TemplateTail);
        assert_eq!(token.kind, TokenKind::TemplateMiddle);
        assert_eq!(token.lexeme, "} b ${");

        let token = lex_tpl("} end`;", LexicalGoal::RegExpOrTemplateTail);
        assert_eq!(token.kind, TokenKind::TemplateTail);
        assert_eq!(token.lexeme, "} end`");
    }

    #[test]
    fn test_full_template_with_goals() {
        let mut lexer = Lexer::new("t.js", "`a${x}b${y}c`", false);
        let head = lexer.next_token(LexicalGoal::RegExp);
        let x = lexer.next_token(LexicalGoal::RegExp);
        let middle = lexer.next_token(LexicalGoal::TemplateTail);
        let y = lexer.next_token(LexicalGoal::RegExp);
        let tail = lexer.next_token(LexicalGoal::RegExpOrTemplateTail);

        assert_eq!((head.kind, head.lexeme), (TokenKind::TemplateHead, "`a${"));
        assert_eq!((x.kind, x.lexeme), (TokenKind::IdentifierName, "x"));
        assert_eq!((middle.kind, middle.lexeme), (TokenKind::TemplateMiddle, "}b${"));
        assert_eq!((y.kind, y.lexeme), (TokenKind::IdentifierName, "y"));
        assert_eq!((tail.kind, tail.lexeme), (TokenKind::TemplateTail, "}c`"));
        assert!(lexer.next_token(LexicalGoal::Div).is_eof());
    }

    #[test]
    fn test_unterminated_template() {
        let token = lex_tpl("`abc", LexicalGoal::Div);
        assert!(token.is_error());
        assert_eq!(token.lexeme, "`abc");
        assert_eq!(
            token.message().as_deref(),
            Some("did not reach end of template literal reached eof")
        );

        assert_eq!(lex_tpl("`abc$", LexicalGoal::Div).lexeme, "`abc$");
        assert_eq!(lex_tpl("`abc\\", LexicalGoal::Div).lexeme, "`abc\\");
    }

    #[test]
    fn test_unterminated_template_tail() {
        let token = lex_tpl("} abc", LexicalGoal::TemplateTail);
        assert!(token.is_error());
        assert_eq!(token.lexeme, "} abc");
        assert_eq!(
            token.message().as_deref(),
            Some("did not reach TemplateMiddle or TemplateTail but reached eof")
        );
    }
}
