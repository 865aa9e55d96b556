//! Scanner module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - Scanner struct, input loading and dispatch
//! - `identifier` - Identifier scanning
//! - `number` - Number scanning
//! - `string` - Quoted-string scanning
//! - `operator` - Operator table and single-character operators
//! - `comment` - Non-token skipping and line comments

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::{tokenize, Scanner};
pub use operator::{operator_kind, OPERATORS};
