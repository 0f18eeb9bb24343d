mod cli;
mod color;
mod commands;
mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::env::CompleteEnv;

use cli::{Cli, Commands};
use store::BookmarkStore;

fn main() -> Result<()> {
    // Handle dynamic completion via COMPLETE environment variable
    CompleteEnv::with_factory(Cli::command).complete();

    let cli = Cli::parse();

    // Resolve color mode from CLI flag and environment variables
    let color_mode = color::ColorMode::resolve(cli.color);

    // The store file location is resolved exactly once here and injected
    // into the store; no other code touches the path.
    let Some(store_path) = BookmarkStore::default_path() else {
        anyhow::bail!(
            "Could not determine home directory. Please set the HOME environment variable."
        );
    };
    let store = BookmarkStore::new(store_path);

    match cli.command {
        Commands::Add { name, path } => {
            commands::add::cmd_add(&store, &name, path.as_deref(), color_mode)
        }
        Commands::Delete { name } => commands::delete::cmd_delete(&store, &name, color_mode),
        Commands::List => commands::list::cmd_list(&store, color_mode),
        Commands::Go { name } => commands::go::cmd_go(&store, &name),
        Commands::ShellFunction { shell } => {
            commands::shell_function::cmd_shell_function(&shell, color_mode)
        }
        Commands::Completion { shell } => commands::completion::cmd_completion(&shell),
    }
}
