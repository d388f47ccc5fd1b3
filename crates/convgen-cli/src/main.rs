//! Convgen CLI.
//!
//! Command-line interface for generating the C++ conversion benchmark
//! corpus.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Generate the corpus into an output directory
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Generate the default corpus (300 examples into ./cpp)
//! convgen generate
//!
//! # Small corpus, JSON report
//! convgen --format json generate --count 2 --out-dir /tmp/corpus
//! ```

use anyhow::Result;
use clap::{CommandFactory, Parser};
use convgen_cli::{Cli, Commands, commands};
use convgen_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    // Parse output format
    let output_format = cli
        .format
        .parse::<OutputFormat>()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    // Execute command and get exit code
    let exit_code = execute_command(cli.command, output_format)?;

    // Exit with appropriate code
    std::process::exit(exit_code.as_i32());
}

/// Initializes logging infrastructure.
///
/// Sets up tracing with appropriate log levels based on verbosity flag.
///
/// # Errors
///
/// Returns an error if logging initialization fails.
fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    Ok(())
}

/// Executes the specified CLI command.
///
/// Routes commands to their respective handlers and returns an exit code.
///
/// # Errors
///
/// Returns an error if command execution fails.
fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            count,
            out_dir,
            prefix,
        } => commands::generate::run(count, &out_dir, &prefix, output_format),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd)
        }
    }
}
