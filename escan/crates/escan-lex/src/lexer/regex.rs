//! Regular expression literal lexing.
//!
//! Only reached under a goal that allows a regular expression. The body is
//! not validated as a pattern; the scanner only finds where the literal
//! ends, which means honoring escapes and character classes (a `/` inside
//! `[...]` does not close the literal).

use crate::error::LexError;
use crate::token::TokenKind;
use crate::unicode::{is_id_continue, is_line_terminator, is_regex_forbidden};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Scans `/body/flags`.
    ///
    /// A line terminator ends the token *before* the terminator, which is
    /// left for the next pull.
    pub(crate) fn scan_regular_expression(&mut self) -> Result<TokenKind, LexError> {
        self.cursor.advance();
        let mut in_class = false;

        loop {
            let Some(c) = self.cursor.peek() else {
                return Err(LexError::UnterminatedRegex);
            };
            if is_line_terminator(c) {
                return Err(LexError::RegexLineTerminator);
            }
            self.cursor.advance();

            match c {
                '/' if !in_class => break,
                '[' => in_class = true,
                ']' => in_class = false,
                '\\' => match self.cursor.peek() {
                    None => return Err(LexError::UnterminatedRegex),
                    Some(escaped) if is_line_terminator(escaped) => {
                        return Err(LexError::RegexLineTerminator);
                    },
                    Some(_) => {
                        self.cursor.advance();
                    },
                },
                c if is_regex_forbidden(c) => return Err(LexError::InvalidRegexChar(c)),
                _ => {},
            }
        }

        self.cursor.eat_while(is_id_continue);
        Ok(TokenKind::RegularExpressionLiteral)
    }
}

#[cfg(test)]
mod tests {
    use crate::{LexicalGoal, Lexer, Token, TokenKind};

    fn lex_regex(source: &str) -> Token<'_> {
        Lexer::new("r.js", source, false).next_token(LexicalGoal::RegExp)
    }

    #[test]
    fn test_simple_regex() {
        let token = lex_regex("/abc/");
        assert_eq!(token.kind, TokenKind::RegularExpressionLiteral);
        assert_eq!(token.lexeme, "/abc/");
    }

    #[test]
    fn test_regex_flags() {
        assert_eq!(lex_regex("/abc/gimsuy.test(s)").lexeme, "/abc/gimsuy");
        assert_eq!(lex_regex("/a/i;").lexeme, "/a/i");
    }

    #[test]
    fn test_regex_after_assignment() {
        let mut lexer = Lexer::new("r.js", "var foo = /abc/i", false);
        let tokens: Vec<Token<'_>> = (0..6).map(|_| lexer.next_token(LexicalGoal::RegExp)).collect();
        assert_eq!(tokens[0].kind, TokenKind::ReservedWord);
        assert_eq!(tokens[2].kind, TokenKind::IdentifierName);
        assert_eq!((tokens[4].kind, tokens[4].lexeme), (TokenKind::Punctuator, "="));
        assert_eq!(tokens[5].kind, TokenKind::WhiteSpace);
        let regex = lexer.next_token(LexicalGoal::RegExp);
        assert_eq!(regex.kind, TokenKind::RegularExpressionLiteral);
        assert_eq!(regex.lexeme, "/abc/i");
    }

    #[test]
    fn test_escaped_slash() {
        assert_eq!(lex_regex(r"/a\/b/g").lexeme, r"/a\/b/g");
        assert_eq!(lex_regex(r"/\\/").lexeme, r"/\\/");
    }

    #[test]
    fn test_slash_in_class() {
        assert_eq!(lex_regex("/[/]+/").lexeme, "/[/]+/");
        assert_eq!(lex_regex(r"/[\]/]/").lexeme, r"/[\]/]/");
    }

    #[test]
    fn test_regex_with_unicode() {
        assert_eq!(lex_regex("/日本語/u").lexeme, "/日本語/u");
    }

    #[test]
    fn test_regex_newline() {
        let mut lexer = Lexer::new("r.js", "/ab\ncd/", false);
        let token = lexer.next_token(LexicalGoal::RegExp);
        assert!(token.is_error());
        assert_eq!(token.lexeme, "/ab");
        assert_eq!(token.message().as_deref(), Some("regex can't have new lines"));
        assert_eq!(lexer.next_token(LexicalGoal::Div).kind, TokenKind::LineTerminator);
    }

    #[test]
    fn test_escaped_newline() {
        let token = lex_regex("/a\\\n/");
        assert!(token.is_error());
        assert_eq!(token.lexeme, "/a\\");
    }

    #[test]
    fn test_unterminated_regex() {
        let token = lex_regex("/abc");
        assert!(token.is_error());
        assert_eq!(token.lexeme, "/abc");
        assert_eq!(token.message().as_deref(), Some("regex did not close with '/'"));

        assert!(lex_regex("/[/").is_error());
    }

    #[test]
    fn test_slash_equals_under_regexp_goal() {
        let token = lex_regex("/=");
        assert!(token.is_error());
        assert_eq!(token.lexeme, "/=");
    }

    #[test]
    fn test_invalid_control_character() {
        let mut lexer = Lexer::new("r.js", "/a\u{1}b/", false);
        let token = lexer.next_token(LexicalGoal::RegExp);
        assert!(token.is_error());
        assert_eq!(token.lexeme, "/a\u{1}");
        assert_eq!(
            token.message().as_deref(),
            Some("invalid character '\\u{1}' in regex")
        );
        assert_eq!(lexer.next_token(LexicalGoal::Div).lexeme, "b");
    }

    #[test]
    fn test_tab_allowed() {
        assert_eq!(lex_regex("/a\tb/").lexeme, "/a\tb/");
    }
}
