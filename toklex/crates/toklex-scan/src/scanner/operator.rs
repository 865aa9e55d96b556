//! Operator table and single-character operators.
//!
//! Every operator is exactly one character. `/` is absent from the table on
//! purpose: the dispatcher decides between DIVIDE and a comment.

use crate::token::{Token, TokenKind};

use super::Scanner;

/// Operator characters and the kind each one produces.
pub const OPERATORS: [(char, TokenKind); 23] = [
    ('+', TokenKind::Plus),
    ('-', TokenKind::Minus),
    ('*', TokenKind::Multiply),
    ('.', TokenKind::Period),
    ('\\', TokenKind::Backslash),
    (':', TokenKind::Colon),
    ('%', TokenKind::Percent),
    ('|', TokenKind::Pipe),
    ('!', TokenKind::Exclamation),
    ('?', TokenKind::Question),
    ('#', TokenKind::Pound),
    ('&', TokenKind::Ampersand),
    (';', TokenKind::Semi),
    (',', TokenKind::Comma),
    ('(', TokenKind::LParen),
    (')', TokenKind::RParen),
    ('<', TokenKind::LAng),
    ('>', TokenKind::RAng),
    ('{', TokenKind::LBrace),
    ('}', TokenKind::RBrace),
    ('[', TokenKind::LBracket),
    (']', TokenKind::RBracket),
    ('=', TokenKind::Equals),
];

/// ASCII-indexed view of [`OPERATORS`].
static OPERATOR_TABLE: [Option<TokenKind>; 128] = build_operator_table();

const fn build_operator_table() -> [Option<TokenKind>; 128] {
    let mut table = [None; 128];
    let mut i = 0;
    while i < OPERATORS.len() {
        let (c, kind) = OPERATORS[i];
        table[c as usize] = Some(kind);
        i += 1;
    }
    table
}

/// Looks up the operator kind for a byte.
///
/// # Example
///
/// ```
/// use toklex_scan::{operator_kind, TokenKind};
///
/// assert_eq!(operator_kind(b'{'), Some(TokenKind::LBrace));
/// assert_eq!(operator_kind(b'/'), None);
/// ```
#[inline]
pub fn operator_kind(b: u8) -> Option<TokenKind> {
    OPERATOR_TABLE.get(usize::from(b)).copied().flatten()
}

impl<'a> Scanner<'a> {
    /// Emits a one-character operator token of `kind`.
    pub(super) fn scan_operator(&mut self, kind: TokenKind) -> Token<'a> {
        self.cursor.advance();
        self.emit(kind)
    }
}
