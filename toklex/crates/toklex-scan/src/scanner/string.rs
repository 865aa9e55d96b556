//! Quoted-string scanning.
//!
//! A quoted string runs from an opening `"` to the next `"` in the buffer.
//! There are no escape sequences, so `\"` ends the literal at its quote.

use crate::error::{ScanError, ScanResult};
use crate::token::{Token, TokenKind};

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a quoted string, both quotes included in the token text.
    ///
    /// # Errors
    ///
    /// [`ScanError::UnterminatedQuote`] at the opening quote when no closing
    /// quote follows. The cursor is left on the opening quote.
    pub(super) fn scan_quote(&mut self) -> ScanResult<Token<'a>> {
        let Some(close) = self.cursor.find_byte(b'"', 1) else {
            return Err(ScanError::UnterminatedQuote {
                offset: self.cursor.position(),
            });
        };

        self.cursor.advance_bytes(close + 1);
        Ok(self.emit(TokenKind::Quote))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan_str(source: &str) -> ScanResult<Token<'_>> {
        let mut scanner = Scanner::new(source);
        scanner.scan_quote()
    }

    #[test]
    fn test_simple_string() {
        assert_eq!(
            scan_str("\"hello\""),
            Ok(Token::new(TokenKind::Quote, "\"hello\"", 0))
        );
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(scan_str("\"\"x").unwrap().text, "\"\"");
    }

    #[test]
    fn test_string_spans_lines() {
        assert_eq!(scan_str("\"a\nb\"").unwrap().text, "\"a\nb\"");
    }

    #[test]
    fn test_backslash_does_not_escape() {
        let mut scanner = Scanner::new(r#""a\"b""#);
        assert_eq!(
            scanner.next_token(),
            Ok(Some(Token::new(TokenKind::Quote, r#""a\""#, 0)))
        );
        assert_eq!(
            scanner.next_token(),
            Ok(Some(Token::new(TokenKind::Identifier, "b", 4)))
        );
        assert_eq!(
            scanner.next_token(),
            Err(ScanError::UnterminatedQuote { offset: 5 })
        );
    }

    #[test]
    fn test_unterminated() {
        assert_eq!(
            scan_str("\"abc"),
            Err(ScanError::UnterminatedQuote { offset: 0 })
        );
        assert_eq!(scan_str("\""), Err(ScanError::UnterminatedQuote { offset: 0 }));
    }

    #[test]
    fn test_unterminated_after_tokens() {
        let mut scanner = Scanner::new("x = \"abc");
        scanner.next_token().unwrap();
        scanner.next_token().unwrap();
        assert_eq!(
            scanner.next_token(),
            Err(ScanError::UnterminatedQuote { offset: 4 })
        );
        assert_eq!(scanner.position(), 4);
    }

    #[test]
    fn test_non_ascii_content() {
        assert_eq!(scan_str("\"héllo\"").unwrap().text, "\"héllo\"");
    }
}
