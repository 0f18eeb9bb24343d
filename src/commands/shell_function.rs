//! Shell function command - Generate the shell integration wrapper
//!
//! The wrapper function `qm` passes known subcommands through to the binary
//! and treats any other argument as a bookmark name: it runs `go` and changes
//! directory only on a zero exit code with non-empty output.

use anyhow::Result;

use crate::color;

/// Command name the templates refer to
const COMMAND_NAME: &str = env!("CARGO_PKG_NAME");

/// Print the shell integration script
///
/// # Errors
/// Returns an error if an invalid shell is specified
pub fn cmd_shell_function(shell: &str, color_mode: color::ColorMode) -> Result<()> {
    let template = match shell {
        "bash" => include_str!("../../templates/bash.sh"),
        "zsh" => include_str!("../../templates/zsh.sh"),
        "fish" => include_str!("../../templates/fish.fish"),
        _ => {
            anyhow::bail!("Invalid shell: {shell}. Supported shells: bash, zsh, fish");
        }
    };

    print!("{}", template.replace("{cmd}", COMMAND_NAME));

    // Hint goes to stderr so `eval "$(quickmark shell-function bash)"` stays clean
    eprintln!(
        "{}",
        color::info(
            color_mode,
            "Add this function to your shell startup file, e.g. ~/.bashrc or ~/.zshrc"
        )
    );

    Ok(())
}
