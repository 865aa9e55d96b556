//! Character classes used by the scanner.
//!
//! All predicates work on a single byte. Anything outside ASCII falls in no
//! class, so non-ASCII input is rejected by the dispatcher.

/// Checks if a byte is skipped between tokens.
///
/// Space, tab, carriage return and line feed.
///
/// # Example
///
/// ```
/// use toklex_scan::chars::is_non_token;
///
/// assert!(is_non_token(b' '));
/// assert!(is_non_token(b'\r'));
/// assert!(!is_non_token(b'/'));
/// ```
#[inline]
pub fn is_non_token(b: u8) -> bool {
    b == b' ' || b == b'\t' || is_newline(b)
}

/// Checks if a byte terminates a line comment.
#[inline]
pub fn is_newline(b: u8) -> bool {
    b == b'\r' || b == b'\n'
}

/// Checks if a byte is an ASCII decimal digit.
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Checks if a byte can start an identifier.
///
/// Valid identifier start characters:
/// - ASCII letters: a-z, A-Z
/// - Underscore: _
/// - Dollar sign: $
///
/// # Example
///
/// ```
/// use toklex_scan::chars::is_ident_start;
///
/// assert!(is_ident_start(b'a'));
/// assert!(is_ident_start(b'$'));
/// assert!(!is_ident_start(b'1'));
/// ```
#[inline]
pub fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$'
}

/// Checks if a byte can continue an identifier.
///
/// All valid start characters plus ASCII digits.
///
/// # Example
///
/// ```
/// use toklex_scan::chars::is_ident_continue;
///
/// assert!(is_ident_continue(b'a'));
/// assert!(is_ident_continue(b'9'));
/// assert!(!is_ident_continue(b'-'));
/// ```
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || is_digit(b)
}
