//! toklex-scan - Hand-written lexical scanner
//!
//! This crate turns a flat text buffer into a lazy sequence of classified
//! tokens: single-character operators, identifiers, numbers, quoted strings
//! and line comments. It is meant to feed a downstream parser.
//!
//! # Example Usage
//!
//! ```
//! use toklex_scan::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("let i = 0; // start");
//!
//! // Get tokens one at a time
//! let token = scanner.next_token().unwrap().unwrap();
//! assert_eq!(token.kind, TokenKind::Identifier);
//! assert_eq!(token.text, "let");
//!
//! // Or iterate over the rest
//! for token in &mut scanner {
//!     println!("{}", token.unwrap());
//! }
//!
//! // End of input is `Ok(None)`, not an error
//! assert_eq!(scanner.next_token(), Ok(None));
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`scanner`] - Scanner, dispatch and sub-scanners
//! - [`cursor`] - Byte cursor over the loaded buffer
//! - [`chars`] - Character class predicates
//! - [`error`] - Scan errors
//!
//! # Token Categories
//!
//! ## Operators
//!
//! One character each, never combined: `+ - * / . \ : % | ! ? # & ; , ( )
//! < > { } [ ] =`. `==` scans as two EQUALS tokens.
//!
//! ## Identifiers
//!
//! Pattern: `[a-zA-Z_$][a-zA-Z0-9_$]*`. No keywords.
//!
//! ## Numbers
//!
//! Pattern: `[0-9]+`. `3.14` is NUMBER, PERIOD, NUMBER.
//!
//! ## Quoted strings
//!
//! `"` to the next `"`, quotes included, no escapes.
//!
//! ## Comments
//!
//! `//` to the end of the line, returned as COMMENT tokens.
//!
//! # Errors
//!
//! An unknown character or an unclosed quote fails the session; see
//! [`ScanError`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod chars;
pub mod cursor;
pub mod error;
pub mod scanner;
pub mod token;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{ScanError, ScanResult};
pub use scanner::{operator_kind, tokenize, Scanner, OPERATORS};
pub use token::{Token, TokenKind};
