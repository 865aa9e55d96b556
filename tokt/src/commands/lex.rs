//! Lex command implementation.
//!
//! Scans one input and prints its tokens, one per line.

use std::io::Write;
use std::path::PathBuf;

use toklex_scan::{Scanner, TokenKind};
use tracing::info;

use crate::commands::common::{read_source, OutputFormat};
use crate::error::{Result, ToktError};

/// Arguments for the lex command.
#[derive(Debug, Clone)]
pub struct LexArgs {
    /// Input file, standard input when `None`.
    pub input: Option<PathBuf>,
    /// Token output format.
    pub format: OutputFormat,
    /// Print COMMENT tokens.
    pub comments: bool,
}

/// Runs the lex command, writing tokens to standard output.
pub fn run_lex(args: LexArgs) -> Result<()> {
    let (name, source) = read_source(args.input.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let count = write_tokens(&mut out, &name, &source, args.format, args.comments)?;
    out.flush()?;

    info!(input = %name, tokens = count, "scan complete");
    Ok(())
}

/// Scans `source` and writes each token to `out`.
///
/// Tokens are written as they are scanned, so output produced before a scan
/// error is kept.
///
/// # Returns
/// * `Result<usize>` - Number of tokens written
pub fn write_tokens<W: Write>(
    out: &mut W,
    name: &str,
    source: &str,
    format: OutputFormat,
    comments: bool,
) -> Result<usize> {
    let mut scanner = Scanner::new(source);
    let mut count = 0;

    loop {
        let token = match scanner.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => break,
            Err(err) => return Err(ToktError::scan(name, &scanner, err)),
        };

        if token.kind == TokenKind::Comment && !comments {
            continue;
        }

        match format {
            OutputFormat::Text => writeln!(out, "{}", token)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &token)?;
                writeln!(out)?;
            },
        }
        count += 1;
    }

    Ok(count)
}
