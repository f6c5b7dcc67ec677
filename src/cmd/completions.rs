//! Completions command implementation
//!
//! Handles the `home-carbon completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::Command;
use clap_complete::{generate, Shell};
use std::io::Write;

/// Generate a shell completion script for `cmd`
///
/// Users can redirect the output to their shell's completion directory.
///
/// ```bash
/// home-carbon completions bash > /etc/bash_completion.d/home-carbon
/// home-carbon completions zsh > ~/.zfunc/_home-carbon
/// ```
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, out);
}

/// Print a shell completion script for `cmd` to stdout
pub fn cmd_completions(shell: Shell, cmd: &mut Command) {
    write_completions(shell, cmd, &mut std::io::stdout());
}
