//! Generate command implementation.
//!
//! Generates the C++ conversion benchmark corpus. This command:
//! 1. Builds a `GeneratorConfig` from CLI arguments
//! 2. Runs the pure generator to produce the in-memory file set
//! 3. Writes the files into the output directory
//! 4. Prints a `GenerationResult` in the selected output format

use anyhow::{Context, Result};
use convgen_codegen::{Generator, write_to_dir};
use convgen_core::cli::{ExitCode, OutputFormat};
use convgen_core::{GeneratorConfig, NamingScheme};
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Result of a corpus generation run.
#[derive(Debug, Serialize)]
struct GenerationResult {
    /// Number of examples generated
    example_count: usize,
    /// Number of files written
    file_count: usize,
    /// Total bytes written
    total_bytes: usize,
    /// Directory the corpus was written to
    output_dir: String,
}

/// Runs the generate command.
///
/// # Arguments
///
/// * `count` - Number of examples to generate (zero yields preambles only)
/// * `out_dir` - Output directory (must already exist)
/// * `prefix` - Prefix for derived type names
/// * `output_format` - Output format (json, text, pretty)
///
/// # Errors
///
/// Returns an error if:
/// - The prefix is not a valid C++ identifier
/// - Template registration or rendering fails
/// - An output file cannot be created or written
///
/// # Examples
///
/// ```no_run
/// use convgen_cli::commands::generate;
/// use convgen_core::cli::{ExitCode, OutputFormat};
/// use std::path::Path;
///
/// # fn example() -> Result<(), anyhow::Error> {
/// let result = generate::run(2, Path::new("cpp"), "A", OutputFormat::Pretty)?;
/// assert_eq!(result, ExitCode::SUCCESS);
/// # Ok(())
/// # }
/// ```
pub fn run(
    count: usize,
    out_dir: &Path,
    prefix: &str,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let naming = NamingScheme::new(prefix)
        .with_context(|| format!("invalid type name prefix '{prefix}'"))?;
    let config = GeneratorConfig { count, naming };

    info!("Generating {} examples into {}", count, out_dir.display());

    let generator = Generator::new().context("failed to create generator")?;
    let code = generator
        .generate(&config)
        .context("failed to generate corpus")?;

    write_to_dir(&code, out_dir).with_context(|| {
        format!(
            "failed to write corpus to '{}' - ensure the directory exists and is writable",
            out_dir.display()
        )
    })?;

    let result = GenerationResult {
        example_count: count,
        file_count: code.file_count(),
        total_bytes: code.total_bytes(),
        output_dir: out_dir.display().to_string(),
    };

    let formatted = crate::formatters::format_output(&result, output_format)?;
    println!("{formatted}");

    info!(
        "Successfully wrote {} files ({} bytes) to {}",
        result.file_count, result.total_bytes, result.output_dir
    );

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_writes_corpus() {
        let dir = tempfile::tempdir().unwrap();
        let code = run(2, dir.path(), "A", OutputFormat::Text).unwrap();

        assert_eq!(code, ExitCode::SUCCESS);
        for name in ["structs.h", "simple.cpp", "foldmap.hpp", "foldmap.cpp"] {
            assert!(dir.path().join(name).exists(), "{name} missing");
        }
    }

    #[test]
    fn test_run_rejects_invalid_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(1, dir.path(), "9bad", OutputFormat::Text);
        assert!(result.is_err());
    }

    #[test]
    fn test_run_surfaces_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let result = run(1, &missing, "A", OutputFormat::Text);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("failed to write corpus"));
    }
}
