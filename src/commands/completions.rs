//! The `completions` subcommand: shell completion scripts.
use anyhow::Result;
use clap::CommandFactory;

use crate::cli::{Cli, CompletionsOpts};

/// Write a completion script for the requested shell to stdout.
///
/// # Errors
///
/// Infallible today; the `Result` keeps the command signature uniform.
pub fn run(opts: &CompletionsOpts) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(opts.shell, &mut cmd, "stager", &mut std::io::stdout());
    Ok(())
}
