//! List command - Print all bookmarks sorted by name

use anyhow::Result;

use crate::color;
use crate::store::BookmarkStore;

/// List all bookmarks as a name-aligned table
///
/// An empty store prints "No bookmarks found." and succeeds; that is a
/// normal outcome, not an error.
///
/// # Errors
/// Infallible in practice; returns `Result` for uniformity with the other
/// command handlers.
pub fn cmd_list(store: &BookmarkStore, color_mode: color::ColorMode) -> Result<()> {
    let entries = store.list();

    if entries.is_empty() {
        println!("No bookmarks found.");
        return Ok(());
    }

    let width = entries
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0);

    println!("Bookmarks:");
    for (name, path) in entries {
        // Pad manually: ANSI codes in the name would break format-width
        let padding = " ".repeat(width - name.chars().count());
        println!(
            "  {}{padding} -> {}",
            color_mode.colorize_name(&name),
            color::dim(color_mode, path)
        );
    }

    Ok(())
}
