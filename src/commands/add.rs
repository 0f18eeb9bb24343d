//! Add command - Bookmark a directory under a short name

use anyhow::{Context, Result};

use crate::color;
use crate::store::BookmarkStore;

/// Bookmark a directory
///
/// When `path` is omitted, the current working directory is bookmarked.
/// The raw path may contain `~` and environment variable references; the
/// store resolves them and records the absolute, normalized path.
///
/// # Errors
/// Returns an error if:
/// - The current directory cannot be determined (when `path` is omitted)
/// - The target is not an existing directory
/// - The store file cannot be written
pub fn cmd_add(
    store: &BookmarkStore,
    name: &str,
    path: Option<&str>,
    color_mode: color::ColorMode,
) -> Result<()> {
    let raw_path = match path {
        Some(path) => path.to_string(),
        None => std::env::current_dir()
            .context("Failed to determine current directory")?
            .to_string_lossy()
            .into_owned(),
    };

    let stored = store.add(name, &raw_path)?;

    eprintln!(
        "{}",
        color::success(
            color_mode,
            format!("Added bookmark '{name}' -> '{stored}'")
        )
    );

    Ok(())
}
