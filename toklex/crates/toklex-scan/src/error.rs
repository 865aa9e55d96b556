//! Error types for the scanner.
//!
//! Both errors are terminal for the scan session that produced them: once
//! [`Scanner::next_token`](crate::Scanner::next_token) returns an error, every
//! further call returns that same error until new input is loaded.

use thiserror::Error;

/// Error raised while scanning a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The character at `offset` does not begin any token class.
    #[error("token error at {offset}: unexpected character {found:?}")]
    Token {
        /// Byte offset of the offending character.
        offset: usize,
        /// The offending character.
        found: char,
    },

    /// An opening quote has no closing quote before the end of the buffer.
    #[error("unterminated quote at {offset}")]
    UnterminatedQuote {
        /// Byte offset of the opening quote.
        offset: usize,
    },
}

impl ScanError {
    /// Returns the byte offset the error points at.
    pub fn offset(&self) -> usize {
        match self {
            ScanError::Token { offset, .. } | ScanError::UnterminatedQuote { offset } => *offset,
        }
    }
}

/// Result type alias for scan operations
pub type ScanResult<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(ScanError::Token { offset: 3, found: '@' }.offset(), 3);
        assert_eq!(ScanError::UnterminatedQuote { offset: 7 }.offset(), 7);
    }

    #[test]
    fn test_display() {
        let err = ScanError::Token { offset: 0, found: '@' };
        assert_eq!(err.to_string(), "token error at 0: unexpected character '@'");

        let err = ScanError::UnterminatedQuote { offset: 12 };
        assert_eq!(err.to_string(), "unterminated quote at 12");
    }
}
