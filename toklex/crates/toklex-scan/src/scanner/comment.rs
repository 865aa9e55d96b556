//! Non-token skipping and line comments.
//!
//! Whitespace is skipped silently. Line comments are tokens: the text runs
//! from `//` up to, but not including, the line terminator.

use crate::chars::is_non_token;
use crate::token::{Token, TokenKind};

use super::Scanner;

impl<'a> Scanner<'a> {
    /// Skips spaces, tabs, carriage returns and line feeds.
    ///
    /// This is called before scanning each token.
    pub(super) fn skip_non_tokens(&mut self) {
        self.cursor.eat_while(is_non_token);
    }

    /// Scans a line comment starting at `//`.
    ///
    /// The token ends before the first CR or LF, or at the end of the buffer.
    /// The terminator itself is consumed so scanning resumes on the next line.
    pub(super) fn scan_comment(&mut self) -> Token<'a> {
        match self.cursor.find_newline(2) {
            Some(len) => {
                self.cursor.advance_bytes(len);
                let token = self.emit(TokenKind::Comment);
                self.cursor.advance();
                token
            },
            None => {
                self.cursor.advance_bytes(self.cursor.len());
                self.emit(TokenKind::Comment)
            },
        }
    }
}
