//! Shell completion generation command.
//!
//! Generates shell completion scripts for bash, zsh, fish, and `PowerShell`.

use anyhow::Result;
use clap::Command;
use clap_complete::{Shell, generate};
use convgen_core::cli::ExitCode;
use std::io;
use tracing::info;

/// Generates shell completion script for the specified shell.
///
/// Prints the completion script to stdout, which can be sourced or saved
/// to the appropriate location for the shell.
///
/// # Examples
///
/// ```no_run
/// use convgen_cli::commands::completions;
/// use clap::Command;
/// use clap_complete::Shell;
///
/// let mut cmd = Command::new("convgen");
/// completions::generate_completions(Shell::Bash, &mut cmd);
/// ```
pub fn generate_completions(shell: Shell, cmd: &mut Command) {
    info!("Generating {} completions", shell);
    generate(shell, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

/// Runs the completions command.
///
/// # Errors
///
/// Infallible in practice; returns `Result` for consistency with the
/// other commands.
pub fn run(shell: Shell, cmd: &mut Command) -> Result<ExitCode> {
    generate_completions(shell, cmd);
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    #[test]
    fn test_generate_completions_bash() {
        let mut cmd = Command::new("convgen");
        // Should not panic
        generate_completions(Shell::Bash, &mut cmd);
    }

    #[test]
    fn test_run_returns_success() {
        let mut cmd = Command::new("convgen");
        let code = run(Shell::Zsh, &mut cmd).unwrap();
        assert!(code.is_success());
    }
}
