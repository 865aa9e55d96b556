//! Token definitions.
//!
//! A [`Token`] is a classified, positioned slice of the scanned buffer. The
//! slice is borrowed, so tokens are cheap to copy and never outlive the input.

use std::fmt;
use std::ops::Range;

/// The class of a token.
///
/// Operator kinds correspond one-to-one with a single character; see
/// [`OPERATORS`](crate::OPERATORS). `Divide` is produced by the `/` special
/// case in the dispatcher and is not part of the operator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum TokenKind {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `.`
    Period,
    /// `\`
    Backslash,
    /// `:`
    Colon,
    /// `%`
    Percent,
    /// `|`
    Pipe,
    /// `!`
    Exclamation,
    /// `?`
    Question,
    /// `#`
    Pound,
    /// `&`
    Ampersand,
    /// `;`
    Semi,
    /// `,`
    Comma,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `<`
    LAng,
    /// `>`
    RAng,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `=`
    Equals,
    /// Run of ASCII letters, digits, `_` and `$` not starting with a digit.
    Identifier,
    /// Run of ASCII digits.
    Number,
    /// Double-quoted literal, quotes included.
    Quote,
    /// `//` line comment, terminator excluded.
    Comment,
}

impl TokenKind {
    /// Returns the kind for a single operator character, if it is one.
    ///
    /// `/` is not an operator here, it is resolved by the dispatcher.
    ///
    /// ```
    /// use toklex_scan::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_operator('+'), Some(TokenKind::Plus));
    /// assert_eq!(TokenKind::from_operator('/'), None);
    /// assert_eq!(TokenKind::from_operator('a'), None);
    /// ```
    pub fn from_operator(c: char) -> Option<TokenKind> {
        if c.is_ascii() {
            crate::scanner::operator_kind(c as u8)
        } else {
            None
        }
    }

    /// Returns true for the single-character operator kinds, `Divide` included.
    pub fn is_operator(self) -> bool {
        !matches!(
            self,
            TokenKind::Identifier | TokenKind::Number | TokenKind::Quote | TokenKind::Comment
        )
    }

    /// Returns the upper-case name of this kind, e.g. `L_PAREN`.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Period => "PERIOD",
            TokenKind::Backslash => "BACKSLASH",
            TokenKind::Colon => "COLON",
            TokenKind::Percent => "PERCENT",
            TokenKind::Pipe => "PIPE",
            TokenKind::Exclamation => "EXCLAMATION",
            TokenKind::Question => "QUESTION",
            TokenKind::Pound => "POUND",
            TokenKind::Ampersand => "AMPERSAND",
            TokenKind::Semi => "SEMI",
            TokenKind::Comma => "COMMA",
            TokenKind::LParen => "L_PAREN",
            TokenKind::RParen => "R_PAREN",
            TokenKind::LAng => "L_ANG",
            TokenKind::RAng => "R_ANG",
            TokenKind::LBrace => "L_BRACE",
            TokenKind::RBrace => "R_BRACE",
            TokenKind::LBracket => "L_BRACKET",
            TokenKind::RBracket => "R_BRACKET",
            TokenKind::Equals => "EQUALS",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Quote => "QUOTE",
            TokenKind::Comment => "COMMENT",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by the scanner.
///
/// # Example
///
/// ```
/// use toklex_scan::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("x1");
/// let token = scanner.next_token().unwrap().unwrap();
/// assert_eq!(token.kind, TokenKind::Identifier);
/// assert_eq!(token.text, "x1");
/// assert_eq!(token.span(), 0..2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token<'a> {
    /// Token class.
    pub kind: TokenKind,
    /// Exact source text of the token.
    pub text: &'a str,
    /// Byte offset of the first character.
    pub start: usize,
}

impl<'a> Token<'a> {
    /// Creates a new token.
    pub fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Self { kind, text, start }
    }

    /// Byte offset one past the last character of `text`.
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Byte range covered by `text`.
    pub fn span(&self) -> Range<usize> {
        self.start..self.end()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {:?}", self.kind, self.start, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::LParen.to_string(), "L_PAREN");
        assert_eq!(TokenKind::RBracket.name(), "R_BRACKET");
        assert_eq!(TokenKind::Semi.name(), "SEMI");
        assert_eq!(TokenKind::Identifier.name(), "IDENTIFIER");
    }

    #[test]
    fn test_is_operator() {
        assert!(TokenKind::Plus.is_operator());
        assert!(TokenKind::Divide.is_operator());
        assert!(!TokenKind::Quote.is_operator());
        assert!(!TokenKind::Comment.is_operator());
    }

    #[test]
    fn test_from_operator_rejects_non_ascii() {
        assert_eq!(TokenKind::from_operator('α'), None);
        assert_eq!(TokenKind::from_operator('='), Some(TokenKind::Equals));
    }

    #[test]
    fn test_token_span() {
        let token = Token::new(TokenKind::Quote, "\"ab\"", 4);
        assert_eq!(token.end(), 8);
        assert_eq!(token.span(), 4..8);
        assert_eq!(token.to_string(), "QUOTE 4 \"\\\"ab\\\"\"");
    }
}
