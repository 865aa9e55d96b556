//! Number scanning.
//!
//! Numbers are unsigned runs of decimal digits. Signs, decimal points and
//! exponents are separate tokens.

use crate::chars::is_digit;
use crate::token::{Token, TokenKind};

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Scans a number.
    ///
    /// The cursor sits on a digit. Leading zeros are kept in the token text.
    pub(super) fn scan_number(&mut self) -> Token<'a> {
        self.cursor.eat_while(is_digit);
        self.emit(TokenKind::Number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan_num(source: &str) -> Token<'_> {
        let mut scanner = Scanner::new(source);
        scanner.scan_number()
    }

    #[test]
    fn test_decimal_integer() {
        assert_eq!(scan_num("42"), Token::new(TokenKind::Number, "42", 0));
        assert_eq!(scan_num("0").text, "0");
        assert_eq!(scan_num("123456").text, "123456");
    }

    #[test]
    fn test_leading_zeros_kept() {
        assert_eq!(scan_num("007").text, "007");
    }

    #[test]
    fn test_stops_before_letters() {
        assert_eq!(scan_num("0xFF").text, "0");
        assert_eq!(scan_num("12ab").text, "12");
    }

    #[test]
    fn test_float_splits_into_three_tokens() {
        let tokens: Vec<_> = Scanner::new("3.14").map(Result::unwrap).collect();
        assert_eq!(
            tokens,
            [
                Token::new(TokenKind::Number, "3", 0),
                Token::new(TokenKind::Period, ".", 1),
                Token::new(TokenKind::Number, "14", 2),
            ]
        );
    }

    #[test]
    fn test_negative_splits_into_minus() {
        let tokens: Vec<_> = Scanner::new("-5").map(Result::unwrap).collect();
        assert_eq!(
            tokens,
            [
                Token::new(TokenKind::Minus, "-", 0),
                Token::new(TokenKind::Number, "5", 1),
            ]
        );
    }
}
