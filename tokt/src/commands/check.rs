//! Check command implementation.
//!
//! Scans each input to the end and reports its token count or its first
//! scan error.

use std::path::PathBuf;

use toklex_scan::Scanner;
use tracing::{debug, error};

use crate::commands::common::read_source;
use crate::error::{Result, ToktError};

/// Arguments for the check command.
#[derive(Debug, Clone, Default)]
pub struct CheckArgs {
    /// Input files, standard input when empty.
    pub inputs: Vec<PathBuf>,
}

/// Runs the check command.
///
/// Every input is checked even after a failure; the command fails if any
/// input did.
pub fn run_check(args: CheckArgs) -> Result<()> {
    let inputs = if args.inputs.is_empty() {
        vec![None]
    } else {
        args.inputs.into_iter().map(Some).collect()
    };

    let mut failed = 0;
    for input in &inputs {
        let (name, source) = match read_source(input.as_deref()) {
            Ok(read) => read,
            Err(err) => {
                error!("{}", err);
                failed += 1;
                continue;
            },
        };
        match count_tokens(&name, &source) {
            Ok(count) => println!("{}: {} tokens", name, count),
            Err(err) => {
                error!("{}", err);
                failed += 1;
            },
        }
    }

    if failed > 0 {
        return Err(ToktError::Validation(format!(
            "{} file(s) failed to scan",
            failed
        )));
    }
    Ok(())
}

/// Scans `source` to the end and returns the number of tokens.
pub fn count_tokens(name: &str, source: &str) -> Result<usize> {
    let mut scanner = Scanner::new(source);
    let mut count = 0;
    loop {
        match scanner.next_token() {
            Ok(Some(_)) => count += 1,
            Ok(None) => break,
            Err(err) => return Err(ToktError::scan(name, &scanner, err)),
        }
    }
    debug!(input = name, tokens = count, "checked");
    Ok(count)
}
