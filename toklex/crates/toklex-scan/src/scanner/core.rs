//! Core scanner implementation.
//!
//! This module contains the Scanner struct, input loading and the
//! next-token dispatch.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::chars::{is_digit, is_ident_start};
use crate::cursor::Cursor;
use crate::error::{ScanError, ScanResult};
use crate::token::{Token, TokenKind};

use super::operator_kind;

/// Scanner over a single input buffer.
///
/// The scanner produces tokens lazily, one per [`next_token`](Self::next_token)
/// call. It is either *scanning* or *failed*: after the first error every
/// call returns that error again until [`load`](Self::load) starts a new
/// session.
///
/// # Example
///
/// ```
/// use toklex_scan::{Scanner, TokenKind};
///
/// let scanner = Scanner::new("a + 1");
/// let kinds: Vec<_> = scanner.map(|t| t.unwrap().kind).collect();
/// assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Plus, TokenKind::Number]);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    /// Cursor over the loaded buffer.
    pub(super) cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    pub(super) token_start: usize,

    /// Set once a scan operation fails.
    failure: Option<ScanError>,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        let mut scanner = Self::default();
        scanner.load(source);
        scanner
    }

    /// Loads a new buffer, discarding the previous position and any failure.
    ///
    /// # Example
    ///
    /// ```
    /// use toklex_scan::Scanner;
    ///
    /// let mut scanner = Scanner::default();
    /// scanner.load("x");
    /// assert_eq!(scanner.next_token().unwrap().unwrap().text, "x");
    /// scanner.load("y");
    /// assert_eq!(scanner.next_token().unwrap().unwrap().text, "y");
    /// ```
    pub fn load(&mut self, source: &'a str) {
        debug!(len = source.len(), "loading scanner input");
        self.cursor = Cursor::new(source);
        self.token_start = 0;
        self.failure = None;
    }

    /// Returns the next token.
    ///
    /// Skips whitespace, then dispatches on the current character. Returns
    /// `Ok(None)` once the buffer is exhausted, and keeps doing so on further
    /// calls.
    ///
    /// # Errors
    ///
    /// [`ScanError::Token`] when the current character starts no token, and
    /// [`ScanError::UnterminatedQuote`] when a quote is never closed.
    pub fn next_token(&mut self) -> ScanResult<Option<Token<'a>>> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        self.skip_non_tokens();
        self.token_start = self.cursor.position();

        let Some(b) = self.cursor.current_byte() else {
            debug!(position = self.token_start, "end of input");
            return Ok(None);
        };

        let result = if b == b'/' {
            if self.cursor.peek_byte(1) == Some(b'/') {
                Ok(self.scan_comment())
            } else {
                Ok(self.scan_operator(TokenKind::Divide))
            }
        } else if let Some(kind) = operator_kind(b) {
            Ok(self.scan_operator(kind))
        } else if is_ident_start(b) {
            Ok(self.scan_identifier())
        } else if is_digit(b) {
            Ok(self.scan_number())
        } else if b == b'"' {
            self.scan_quote()
        } else {
            Err(ScanError::Token {
                offset: self.token_start,
                found: self.cursor.current_char(),
            })
        };

        match result {
            Ok(token) => {
                trace!(kind = %token.kind, start = token.start, text = token.text, "token");
                Ok(Some(token))
            },
            Err(err) => {
                debug!(%err, "scan failed");
                self.failure = Some(err.clone());
                Err(err)
            },
        }
    }

    /// Builds a token of `kind` from the token start to the cursor.
    pub(super) fn emit(&self, kind: TokenKind) -> Token<'a> {
        Token::new(kind, self.cursor.slice_from(self.token_start), self.token_start)
    }

    /// Returns the current byte position in the buffer.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the loaded buffer.
    pub fn source(&self) -> &'a str {
        self.cursor.source()
    }

    /// Returns true once a scan operation has failed.
    pub fn is_failed(&self) -> bool {
        self.failure.is_some()
    }
}

impl Default for Scanner<'_> {
    /// An empty scanner; its first `next_token` reports end of input.
    fn default() -> Self {
        Self {
            cursor: Cursor::new(""),
            token_start: 0,
            failure: None,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = ScanResult<Token<'a>>;

    /// Yields tokens until end of input, or a single error and then `None`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.failure.is_some() {
            return None;
        }
        self.next_token().transpose()
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scans `source` to the end and collects its tokens.
///
/// # Example
///
/// ```
/// use toklex_scan::{tokenize, ScanError};
///
/// assert_eq!(tokenize("a;b").unwrap().len(), 3);
/// assert_eq!(
///     tokenize("a @").unwrap_err(),
///     ScanError::Token { offset: 2, found: '@' }
/// );
/// ```
pub fn tokenize(source: &str) -> ScanResult<Vec<Token<'_>>> {
    Scanner::new(source).collect()
}
