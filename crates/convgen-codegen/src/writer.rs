//! Thin I/O adapter for generated code.
//!
//! Writes an in-memory [`GeneratedCode`] under a target directory. This
//! is the only place in the crate that touches the filesystem, keeping
//! generation itself pure and testable.
//!
//! Sink creation failures are surfaced as [`Error::SinkCreation`] and
//! abort the write; nothing is retried. The writer does not create
//! missing directories, so pointing it at a nonexistent output directory
//! fails on the first file.

use crate::types::GeneratedCode;
use convgen_core::{Error, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes every generated file under `dir`, in collection order.
///
/// Each file handle is scoped to its own write and closed before the
/// next file is created.
///
/// # Errors
///
/// Returns [`Error::SinkCreation`] if any output file cannot be created
/// or written (missing directory, permission denial). The first failure
/// aborts the run; earlier files may already have been written.
///
/// # Examples
///
/// ```no_run
/// use convgen_codegen::{Generator, write_to_dir};
/// use convgen_core::GeneratorConfig;
///
/// # fn example() -> convgen_core::Result<()> {
/// let generator = Generator::new()?;
/// let code = generator.generate(&GeneratorConfig::default())?;
/// write_to_dir(&code, "cpp")?;
/// # Ok(())
/// # }
/// ```
pub fn write_to_dir(code: &GeneratedCode, dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();

    for file in code.files() {
        let path = dir.join(&file.path);

        let mut sink = File::create(&path).map_err(|source| Error::SinkCreation {
            path: path.clone(),
            source,
        })?;
        sink.write_all(file.content.as_bytes())
            .map_err(|source| Error::SinkCreation {
                path: path.clone(),
                source,
            })?;

        tracing::debug!("Wrote {} ({} bytes)", path.display(), file.content.len());
    }

    tracing::info!(
        "Wrote {} files to {}",
        code.file_count(),
        dir.display()
    );

    Ok(())
}
