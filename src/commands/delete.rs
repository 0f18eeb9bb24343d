//! Delete command - Remove a bookmark by name

use anyhow::Result;

use crate::color;
use crate::store::BookmarkStore;

/// Remove a bookmark
///
/// # Errors
/// Returns an error if:
/// - The bookmark name does not exist (the store file is left untouched)
/// - The store file cannot be written
pub fn cmd_delete(store: &BookmarkStore, name: &str, color_mode: color::ColorMode) -> Result<()> {
    store.delete(name)?;

    eprintln!(
        "{}",
        color::success(color_mode, format!("Deleted bookmark '{name}'"))
    );

    Ok(())
}
