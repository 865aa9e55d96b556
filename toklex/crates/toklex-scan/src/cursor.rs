//! Byte cursor over the scanned buffer.
//!
//! This module provides the `Cursor` struct which owns the scan position for
//! one buffer. It tracks line/column information for diagnostics and never
//! reads past the end of the buffer.

/// A cursor over a source buffer.
///
/// The position is a byte offset. It only ever moves forward and always
/// stays on a character boundary, because every scan step stops on an ASCII
/// byte or at the end of the buffer.
///
/// # Example
///
/// ```
/// use toklex_scan::cursor::Cursor;
///
/// let mut cursor = Cursor::new("ab");
/// assert_eq!(cursor.current_byte(), Some(b'a'));
/// cursor.advance();
/// assert_eq!(cursor.current_byte(), Some(b'b'));
/// cursor.advance();
/// assert!(cursor.is_at_end());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The buffer being scanned.
    source: &'a str,

    /// Current byte position in the buffer.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in characters).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the cursor, or `None` at the end of the buffer.
    #[inline]
    pub fn current_byte(&self) -> Option<u8> {
        self.peek_byte(0)
    }

    /// Returns the byte `offset` bytes ahead of the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use toklex_scan::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("//");
    /// assert_eq!(cursor.peek_byte(1), Some(b'/'));
    /// assert_eq!(cursor.peek_byte(2), None);
    /// ```
    #[inline]
    pub fn peek_byte(&self, offset: usize) -> Option<u8> {
        self.source.as_bytes().get(self.position + offset).copied()
    }

    /// Returns the character at the cursor, or '\0' at the end of the buffer.
    pub fn current_char(&self) -> char {
        self.source[self.position..].chars().next().unwrap_or('\0')
    }

    /// Advances the cursor by one byte.
    ///
    /// Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_bytes(1);
    }

    /// Advances by `count` bytes, clamped to the end of the buffer.
    pub fn advance_bytes(&mut self, count: usize) {
        let bytes = self.source.as_bytes();
        let end = (self.position + count).min(bytes.len());

        let start = self.position;
        for (i, &b) in bytes[start..end].iter().enumerate() {
            // A CR followed by LF leaves the line break to the LF
            let is_line_break =
                b == b'\n' || (b == b'\r' && bytes.get(start + i + 1) != Some(&b'\n'));
            if is_line_break {
                self.line += 1;
                self.column = 1;
            } else if b & 0xC0 != 0x80 {
                // UTF-8 continuation bytes don't start a new column
                self.column += 1;
            }
        }

        self.position = end;
    }

    /// Advances while `pred` holds for the current byte.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.current_byte().is_some_and(&pred) {
            self.advance();
        }
    }

    /// Returns the distance from the cursor to the first `needle` found at or
    /// after `skip` bytes ahead.
    ///
    /// # Example
    ///
    /// ```
    /// use toklex_scan::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("\"ab\"");
    /// assert_eq!(cursor.find_byte(b'"', 1), Some(3));
    /// assert_eq!(cursor.find_byte(b'x', 1), None);
    /// ```
    pub fn find_byte(&self, needle: u8, skip: usize) -> Option<usize> {
        let from = (self.position + skip).min(self.source.len());
        memchr::memchr(needle, &self.source.as_bytes()[from..]).map(|i| i + from - self.position)
    }

    /// Like [`find_byte`](Self::find_byte), for the first carriage return or
    /// line feed.
    pub fn find_newline(&self, skip: usize) -> Option<usize> {
        let from = (self.position + skip).min(self.source.len());
        memchr::memchr2(b'\r', b'\n', &self.source.as_bytes()[from..])
            .map(|i| i + from - self.position)
    }

    /// Returns true if the cursor is at the end of the buffer.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Returns true if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Returns the buffer between two byte offsets.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.source[start..end]
    }

    /// Returns the buffer from `start` up to the current position.
    ///
    /// # Example
    ///
    /// ```
    /// use toklex_scan::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// cursor.advance_bytes(3);
    /// assert_eq!(cursor.slice_from(0), "let");
    /// ```
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.position)
    }

    /// Returns the full buffer.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
