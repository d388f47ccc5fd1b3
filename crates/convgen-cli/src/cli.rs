//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Convgen - C++ conversion benchmark corpus generator.
///
/// Generates a corpus of near-identical C++ struct definitions and two
/// parallel sets of conversion functions (manual loop vs. generic
/// fold/map) for compile-time benchmarking.
#[derive(Parser, Debug)]
#[command(name = "convgen")]
#[command(version, about, long_about = None)]
#[command(author = "Convgen Team")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the C++ corpus into an output directory.
    ///
    /// Writes `structs.h`, `simple.cpp`, `foldmap.hpp`, and `foldmap.cpp`
    /// into the output directory. The directory must already exist; a
    /// missing directory is reported as a sink creation failure.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Default corpus (300 examples into ./cpp)
    /// convgen generate
    ///
    /// # Small corpus with a custom prefix
    /// convgen generate --count 10 --prefix Bench --out-dir /tmp/corpus
    /// ```
    Generate {
        /// Number of examples to generate
        #[arg(short, long, default_value_t = 300)]
        count: usize,

        /// Output directory for the generated files
        #[arg(short, long = "out-dir", default_value = "cpp")]
        out_dir: PathBuf,

        /// Prefix for derived type names (must be a valid C++ identifier)
        #[arg(short, long, default_value = "A")]
        prefix: String,
    },

    /// Generate shell completion scripts.
    ///
    /// Outputs a completion script for the specified shell that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_generate_defaults() {
        let cli = Cli::parse_from(["convgen", "generate"]);
        if let Commands::Generate {
            count,
            out_dir,
            prefix,
        } = cli.command
        {
            assert_eq!(count, 300);
            assert_eq!(out_dir, PathBuf::from("cpp"));
            assert_eq!(prefix, "A");
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_parsing_generate_custom() {
        let cli = Cli::parse_from([
            "convgen",
            "generate",
            "--count",
            "10",
            "--out-dir",
            "/tmp/corpus",
            "--prefix",
            "Bench",
        ]);
        if let Commands::Generate {
            count,
            out_dir,
            prefix,
        } = cli.command
        {
            assert_eq!(count, 10);
            assert_eq!(out_dir, PathBuf::from("/tmp/corpus"));
            assert_eq!(prefix, "Bench");
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::parse_from(["convgen", "--verbose", "generate"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_output_format_default() {
        let cli = Cli::parse_from(["convgen", "generate"]);
        assert_eq!(cli.format, "pretty");
    }

    #[test]
    fn test_cli_output_format_custom() {
        let cli = Cli::parse_from(["convgen", "--format", "json", "generate"]);
        assert_eq!(cli.format, "json");
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::parse_from(["convgen", "completions", "zsh"]);
        if let Commands::Completions { shell } = cli.command {
            assert_eq!(shell, Shell::Zsh);
        } else {
            panic!("Expected Completions command");
        }
    }
}
