//! Tokt CLI - command-line front end for the toklex scanner.
//!
//! This is the main entry point for the tokt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{run_check, run_lex, CheckArgs, LexArgs};
use config::Config;
use error::{Result, ToktError};

/// Tokt - scan source text into tokens
#[derive(Parser, Debug)]
#[command(name = "tokt")]
#[command(author = "Toklex Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan source text into tokens", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "TOKT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "TOKT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "TOKT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the tokt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of an input
    ///
    /// Reads FILE (or standard input) and prints one token per line.
    Lex(LexCommand),

    /// Check that inputs scan cleanly
    ///
    /// Scans each FILE to the end and reports its token count or its
    /// first error.
    Check(CheckCommand),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCommand {
    /// Input file, `-` or absent for standard input
    input: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<OutputFormat>,

    /// Don't print comment tokens
    #[arg(long)]
    no_comments: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Input files, standard input when none are given
    inputs: Vec<PathBuf>,
}

/// Main entry point for the tokt CLI.
///
/// Parses command-line arguments and runs them, printing any failure once
/// on stderr.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration, initializes logging, and dispatches to the
/// appropriate command handler.
fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Initialize logging
    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output on stdout stays machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| ToktError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Lex(args) => execute_lex(args, config),
        Commands::Check(args) => run_check(CheckArgs {
            inputs: args.inputs,
        }),
    }
}

/// Execute the lex command, with flags taking precedence over config.
fn execute_lex(args: LexCommand, config: Config) -> Result<()> {
    let lex_args = LexArgs {
        input: args.input,
        format: args.format.unwrap_or(config.output.format),
        comments: config.output.comments && !args.no_comments,
    };
    run_lex(lex_args)
}
