//! Edge case tests for toklex-scan

#[cfg(test)]
mod tests {
    use crate::{ScanError, Scanner, Token, TokenKind};

    fn lex_all(source: &str) -> Result<Vec<Token<'_>>, ScanError> {
        let mut scanner = Scanner::new(source);
        let mut tokens = Vec::new();
        while let Some(token) = scanner.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_single_char_ident() {
        let t = lex_all("x").unwrap();
        assert_eq!(t, [Token::new(TokenKind::Identifier, "x", 0)]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let source = format!("{} = 1;", name);
        let t = lex_all(&source).unwrap();
        assert_eq!(t[0].text.len(), 10000);
        assert_eq!(t[1].start, 10001);
    }

    #[test]
    fn test_edge_long_number() {
        let digits = "9".repeat(500);
        let t = lex_all(&digits).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Number);
    }

    #[test]
    fn test_edge_underscore_and_dollar_alone() {
        let t = lex_all("_ $").unwrap();
        assert_eq!(t[0], Token::new(TokenKind::Identifier, "_", 0));
        assert_eq!(t[1], Token::new(TokenKind::Identifier, "$", 2));
    }

    #[test]
    fn test_edge_digit_then_identifier_char() {
        let t = lex_all("1_a").unwrap();
        assert_eq!(t[0], Token::new(TokenKind::Number, "1", 0));
        assert_eq!(t[1], Token::new(TokenKind::Identifier, "_a", 1));
    }

    #[test]
    fn test_edge_adjacent_quotes() {
        let t = lex_all("\"a\"\"b\"").unwrap();
        assert_eq!(t[0], Token::new(TokenKind::Quote, "\"a\"", 0));
        assert_eq!(t[1], Token::new(TokenKind::Quote, "\"b\"", 3));
    }

    #[test]
    fn test_edge_quote_containing_comment_marker() {
        let t = lex_all("\"// not a comment\" x").unwrap();
        assert_eq!(t[0].kind, TokenKind::Quote);
        assert_eq!(t[1], Token::new(TokenKind::Identifier, "x", 19));
    }

    #[test]
    fn test_edge_slash_before_newline() {
        let t = lex_all("/\n/").unwrap();
        assert_eq!(t[0], Token::new(TokenKind::Divide, "/", 0));
        assert_eq!(t[1], Token::new(TokenKind::Divide, "/", 2));
    }

    #[test]
    fn test_edge_slash_space_slash() {
        let t = lex_all("/ /").unwrap();
        assert_eq!(t.len(), 2);
        assert!(t.iter().all(|tok| tok.kind == TokenKind::Divide));
    }

    #[test]
    fn test_edge_comment_ending_buffer_with_newline() {
        let t = lex_all("// x\n").unwrap();
        assert_eq!(t, [Token::new(TokenKind::Comment, "// x", 0)]);
    }

    #[test]
    fn test_edge_carriage_return_only() {
        let t = lex_all("// x\ry").unwrap();
        assert_eq!(t[1], Token::new(TokenKind::Identifier, "y", 5));
    }

    #[test]
    fn test_edge_form_feed_rejected() {
        assert_eq!(
            lex_all("a\u{0C}b"),
            Err(ScanError::Token { offset: 1, found: '\u{0C}' })
        );
    }

    #[test]
    fn test_edge_nul_rejected() {
        assert_eq!(
            lex_all("\0"),
            Err(ScanError::Token { offset: 0, found: '\0' })
        );
    }

    #[test]
    fn test_edge_single_quote_rejected() {
        assert_eq!(
            lex_all("'a'"),
            Err(ScanError::Token { offset: 0, found: '\'' })
        );
    }

    #[test]
    fn test_edge_unicode_identifier_rejected() {
        assert_eq!(
            lex_all("αβ"),
            Err(ScanError::Token { offset: 0, found: 'α' })
        );
    }

    #[test]
    fn test_edge_unicode_in_comment_allowed() {
        let t = lex_all("// héllo ✓\nx").unwrap();
        assert_eq!(t[0].text, "// héllo ✓");
        assert_eq!(t[1].text, "x");
    }

    #[test]
    fn test_edge_error_after_valid_tokens() {
        let mut scanner = Scanner::new("a + `");
        assert!(scanner.next_token().unwrap().is_some());
        assert!(scanner.next_token().unwrap().is_some());
        assert_eq!(
            scanner.next_token(),
            Err(ScanError::Token { offset: 4, found: '`' })
        );
    }

    #[test]
    fn test_edge_progress_on_every_token() {
        let source = "a1 22 \"q\" // c\n+-*/.\\:%|!?#&;,()<>{}[]=";
        let mut scanner = Scanner::new(source);
        let mut last = 0;
        while let Some(token) = scanner.next_token().unwrap() {
            assert!(scanner.position() > last);
            assert!(token.start >= last);
            last = scanner.position();
        }
        assert_eq!(last, source.len());
    }
}
