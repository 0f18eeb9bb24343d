use clap::{Parser, Subcommand};
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate};
use std::ffi::OsStr;

use crate::store::{BookmarkStore, Bookmarks};

/// Directory bookmarking tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// When to use colored output
    #[arg(long, value_name = "WHEN", global = true, ignore_case = true)]
    pub color: Option<crate::color::ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bookmark a directory under a short name
    Add {
        /// Name of the bookmark
        name: String,
        /// Directory to bookmark (defaults to the current directory)
        path: Option<String>,
    },
    /// Delete a bookmark
    Delete {
        /// Name of the bookmark to delete
        #[arg(add = ArgValueCompleter::new(list_bookmark_names))]
        name: String,
    },
    /// List all bookmarks
    List,
    /// Print the path of a bookmark (consumed by the shell wrapper)
    Go {
        /// Name of the bookmark to navigate to
        #[arg(add = ArgValueCompleter::new(list_bookmark_names))]
        name: String,
    },
    /// Print the shell integration function
    ShellFunction {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
    /// Generate shell completion setup instructions
    Completion {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },
}

/// List bookmark names for completion
///
/// Returns empty Vec if the store file is missing, unreadable, or corrupt
/// (completion must never write diagnostics to stderr)
/// Filters names by the provided prefix
pub fn list_bookmark_names(current: &OsStr) -> Vec<CompletionCandidate> {
    let Some(path) = BookmarkStore::default_path() else {
        return Vec::new();
    };

    let Ok(content) = std::fs::read_to_string(&path) else {
        return Vec::new();
    };

    let Ok(bookmarks) = serde_json::from_str::<Bookmarks>(&content) else {
        return Vec::new();
    };

    let prefix = current.to_string_lossy();

    bookmarks
        .iter()
        .filter(|(name, _)| name.starts_with(&*prefix))
        .map(|(name, _)| CompletionCandidate::new(name))
        .collect()
}
