//! Identifier scanning.

use crate::chars::is_ident_continue;
use crate::token::{Token, TokenKind};

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Scans an identifier.
    ///
    /// The cursor sits on a validated start character. Consumes the longest
    /// run of ASCII letters, digits, `_` and `$`. Reserved words are not
    /// recognized here; they come out as plain identifiers.
    pub(super) fn scan_identifier(&mut self) -> Token<'a> {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        self.emit(TokenKind::Identifier)
    }
}
