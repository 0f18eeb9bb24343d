//! Completion command - Generate completion setup instructions
//!
//! Dynamic completion is served by the binary itself whenever the COMPLETE
//! environment variable is set; this command prints the one line a user needs
//! in their shell config to wire that up, alongside a pointer to the matching
//! `shell-function` setup.

use anyhow::Result;

/// Command name the instructions refer to
const COMMAND_NAME: &str = env!("CARGO_PKG_NAME");

/// Print completion setup instructions for the given shell
///
/// # Errors
/// Returns an error if an invalid shell is specified
pub fn cmd_completion(shell: &str) -> Result<()> {
    let (config_file, source_line) = match shell {
        "bash" => (
            "~/.bashrc",
            format!("source <(COMPLETE=bash {COMMAND_NAME})"),
        ),
        "zsh" => ("~/.zshrc", format!("source <(COMPLETE=zsh {COMMAND_NAME})")),
        "fish" => (
            "~/.config/fish/config.fish",
            format!("source (COMPLETE=fish {COMMAND_NAME} | psub)"),
        ),
        _ => {
            anyhow::bail!("Invalid shell: {shell}. Supported shells: bash, zsh, fish");
        }
    };

    println!("# {COMMAND_NAME} completion setup for {shell}");
    println!("# Add this to your {config_file}:");
    println!("{source_line}");
    println!("#");
    println!("# The qm wrapper itself is set up separately:");
    println!("#   {COMMAND_NAME} shell-function {shell}");

    Ok(())
}
