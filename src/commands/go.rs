//! Go command - Print the path stored for a bookmark
//!
//! stdout carries only the path; the shell wrapper consumes it with `cd`.
//! The stored directory is not re-checked for existence: the contract is to
//! return exactly the string recorded at add-time.

use anyhow::Result;

use crate::store::BookmarkStore;

/// Print the stored path for a bookmark
///
/// # Errors
/// Returns an error if the bookmark name does not exist
pub fn cmd_go(store: &BookmarkStore, name: &str) -> Result<()> {
    let path = store.resolve(name)?;
    println!("{path}");
    Ok(())
}
