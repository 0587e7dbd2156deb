//! Completions command handler

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};
use std::io::{self, Write};

/// Handle completions command by writing the script to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle<C: CommandFactory>(shell: CompletionShell) -> Result<()> {
    generate_completions::<C, _>(shell, &mut io::stdout())
}

/// Generate shell completion script.
pub(crate) fn generate_completions<C: CommandFactory, W: Write>(
    shell: CompletionShell,
    out: &mut W,
) -> Result<()> {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "slidecraft", out);
    Ok(())
}
