//! Edge case tests for escan-lex

#[cfg(test)]
mod tests {
    use crate::{LexerConfig, LexicalGoal, Lexer, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token<'_>> {
        Lexer::new("edge.js", source, false).tokenize(LexicalGoal::Div)
    }

    fn concat(tokens: &[Token<'_>]) -> String {
        tokens.iter().map(|t| t.lexeme).collect()
    }

    // ==================== SCANNER CONTRACT ====================

    #[test]
    fn test_edge_empty_source() {
        let mut lexer = Lexer::new("edge.js", "", false);
        let token = lexer.next_token(LexicalGoal::RegExp);
        assert_eq!(token.kind, TokenKind::EndOfInput);
        assert_eq!(token.lexeme, "");
    }

    #[test]
    fn test_edge_longest_match() {
        let t = lex_all(">>>=");
        assert_eq!(t.len(), 1);
        assert_eq!((t[0].kind, t[0].lexeme), (TokenKind::Punctuator, ">>>="));
    }

    #[test]
    fn test_edge_slash_equals_by_goal() {
        let div = Lexer::new("edge.js", "/=", false).next_token(LexicalGoal::Div);
        assert_eq!((div.kind, div.lexeme), (TokenKind::DivPunctuator, "/="));

        let regexp = Lexer::new("edge.js", "/=", false).next_token(LexicalGoal::RegExp);
        assert_eq!(regexp.kind, TokenKind::Error);
    }

    #[test]
    fn test_edge_unterminated_string_alone() {
        let mut lexer = Lexer::new("edge.js", "\"abc", false);
        let first = lexer.next_token(LexicalGoal::Div);
        assert!(first.is_error());
        assert!(first.message().is_some_and(|m| m.contains("string literal")));
        assert!(lexer.next_token(LexicalGoal::Div).is_eof());
    }

    #[test]
    fn test_edge_errors_are_lossless() {
        let source = "a = \"ok\" # 1o /* open";
        let tokens = lex_all(source);
        assert_eq!(concat(&tokens), source);
        let errors: Vec<&str> = tokens
            .iter()
            .filter(|t| t.is_error())
            .map(|t| t.lexeme)
            .collect();
        assert_eq!(errors, vec!["#", "1o", "/* open"]);
    }

    // ==================== INPUT SHAPES ====================

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10_000);
        let source = format!("var {} = 1;", name);
        let tokens = lex_all(&source);
        assert_eq!(tokens[2].lexeme, name);
        assert_eq!(tokens[2].kind, TokenKind::IdentifierName);
    }

    #[test]
    fn test_edge_huge_unterminated_comment() {
        let source = format!("/*{}", "x\n".repeat(5_000));
        let tokens = lex_all(&source);
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_error());
        assert_eq!(tokens[0].lexeme.len(), source.len());
    }

    #[test]
    fn test_edge_byte_order_mark() {
        let tokens = lex_all("\u{FEFF}x");
        assert_eq!((tokens[0].kind, tokens[0].lexeme), (TokenKind::WhiteSpace, "\u{FEFF}"));
        assert_eq!(tokens[1].position.byte_offset, 3);
        assert_eq!(tokens[1].position.column, 1);
    }

    #[test]
    fn test_edge_astral_columns() {
        let tokens = lex_all("'😀' x");
        let x = tokens.last().unwrap();
        assert_eq!(x.lexeme, "x");
        assert_eq!(x.position.byte_offset, 7);
        assert_eq!(x.position.column, 4);
    }

    #[test]
    fn test_edge_unicode_whitespace_and_separators() {
        let tokens = lex_all("a\u{2003}b\u{2028}c");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::IdentifierName,
                TokenKind::WhiteSpace,
                TokenKind::IdentifierName,
                TokenKind::LineTerminator,
                TokenKind::IdentifierName,
            ]
        );
        assert_eq!(tokens[4].position.line, 2);
    }

    #[test]
    fn test_edge_only_trivia_suppressed() {
        let config = LexerConfig::default().capture_trivia(false);
        let mut lexer = Lexer::with_config("edge.js", "  /* a */  // b", config);
        assert!(lexer.next_token(LexicalGoal::Div).is_eof());
    }

    // ==================== AMBIGUITIES ====================

    #[test]
    fn test_edge_signed_literal_after_identifier() {
        let t = lex_all("a-1");
        assert_eq!(t[1].lexeme, "-1");
        assert_eq!(t[1].kind, TokenKind::NumericLiteral);

        let t = lex_all("a - 1");
        assert_eq!((t[2].kind, t[2].lexeme), (TokenKind::Punctuator, "-"));
    }

    #[test]
    fn test_edge_brace_in_template_substitution() {
        // `${ {a} }`: the inner braces are ordinary, the last closes the
        // substitution.
        let mut lexer = Lexer::new("edge.js", "`${{a}}`", false);
        let pulls = [
            LexicalGoal::RegExp,
            LexicalGoal::RegExp,
            LexicalGoal::Div,
            LexicalGoal::Div,
            LexicalGoal::TemplateTail,
        ];
        let tokens: Vec<(TokenKind, &str)> = pulls
            .into_iter()
            .map(|goal| {
                let t = lexer.next_token(goal);
                (t.kind, t.lexeme)
            })
            .collect();
        assert_eq!(
            tokens,
            vec![
                (TokenKind::TemplateHead, "`${"),
                (TokenKind::Punctuator, "{"),
                (TokenKind::IdentifierName, "a"),
                (TokenKind::RightBracePunctuator, "}"),
                (TokenKind::TemplateTail, "}`"),
            ]
        );
    }

    #[test]
    fn test_edge_division_chain() {
        let t = lex_all("a/b/c");
        assert_eq!(t[1].kind, TokenKind::DivPunctuator);
        assert_eq!(t[3].kind, TokenKind::DivPunctuator);
    }

    #[test]
    fn test_edge_comment_wins_over_regex() {
        let t = Lexer::new("edge.js", "//a/", false).next_token(LexicalGoal::RegExp);
        assert_eq!(t.kind, TokenKind::SingleLineComment);
    }

    #[test]
    fn test_edge_keyword_prefix_and_suffix() {
        for (source, kind) in [
            ("in", TokenKind::ReservedWord),
            ("instanceof", TokenKind::ReservedWord),
            ("inner", TokenKind::IdentifierName),
            ("for_", TokenKind::IdentifierName),
            ("$this", TokenKind::IdentifierName),
        ] {
            let t = lex_all(source);
            assert_eq!(t.len(), 1, "{source}");
            assert_eq!(t[0].kind, kind, "{source}");
        }
    }

    #[test]
    fn test_edge_goals_do_not_change_plain_tokens() {
        for goal in LexicalGoal::ALL {
            let tokens = Lexer::new("edge.js", "x+1", false).tokenize(goal);
            let lexemes: Vec<&str> = tokens.iter().map(|t| t.lexeme).collect();
            assert_eq!(lexemes, vec!["x", "+", "1"], "{goal}");
        }
    }
}
