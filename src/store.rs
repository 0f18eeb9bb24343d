//! Bookmark store - load, mutate, and persist the name -> path mapping
//!
//! The store is a single JSON file. Every operation reloads the file, applies
//! its change, and rewrites the whole file; nothing is cached between
//! invocations, so the file on disk is always the source of truth.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Name of the store file inside the user's home directory
const STORE_FILE_NAME: &str = ".quickmark_bookmarks.json";

/// Errors reported by store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Bookmark '{0}' not found")]
    NotFound(String),

    #[error("Directory '{0}' does not exist")]
    InvalidDirectory(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The name -> absolute path mapping held by the store file
///
/// A `BTreeMap` keeps iteration (and the saved JSON) sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bookmarks(BTreeMap<String, String>);

impl Bookmarks {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn insert(&mut self, name: String, path: String) {
        self.0.insert(name, path);
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.0.remove(name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Entries in lexicographic name order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.0.iter()
    }
}

/// File-backed bookmark store
///
/// The store file path is injected at construction so callers (and tests) can
/// point the store anywhere; `main` resolves the default location exactly
/// once.
pub struct BookmarkStore {
    path: PathBuf,
}

impl BookmarkStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default store file location: `~/.quickmark_bookmarks.json`
    ///
    /// Returns `None` when the home directory cannot be determined.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(STORE_FILE_NAME))
    }

    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// Load the mapping from the store file
    ///
    /// Never fails: a missing file yields an empty mapping, and an unreadable
    /// or unparseable file yields an empty mapping after a warning on stderr.
    /// Stale content is discarded by the next successful save.
    #[must_use]
    pub fn load(&self) -> Bookmarks {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Bookmarks::default();
            }
            Err(err) => {
                eprintln!(
                    "Warning: could not read bookmarks file {}: {err}",
                    self.path.display()
                );
                return Bookmarks::default();
            }
        };

        match serde_json::from_str(&content) {
            Ok(bookmarks) => bookmarks,
            Err(_) => {
                eprintln!(
                    "Warning: bookmarks file {} is corrupted and will be replaced on the next write",
                    self.path.display()
                );
                Bookmarks::default()
            }
        }
    }

    /// Overwrite the store file with the given mapping
    ///
    /// # Errors
    /// Returns an error if the file cannot be written (permissions, disk
    /// full). There is no recovery path for this; callers propagate it.
    pub fn save(&self, bookmarks: &Bookmarks) -> Result<(), StoreError> {
        let mut content = serde_json::to_string_pretty(bookmarks)?;
        content.push('\n');
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Add a bookmark, overwriting any existing entry with the same name
    ///
    /// `raw_path` may contain a leading `~` and `$VAR`/`${VAR}` references.
    /// The expanded path must be an existing directory; it is stored in
    /// absolute, normalized form (symlinks are kept as given, not resolved),
    /// which is also returned for confirmation messaging.
    ///
    /// # Errors
    /// Returns `InvalidDirectory` (without touching the store file) if the
    /// expanded path is not an existing directory, or an I/O error if the
    /// save fails.
    pub fn add(&self, name: &str, raw_path: &str) -> Result<String, StoreError> {
        let expanded = expand_path(raw_path);

        if !expanded.is_dir() {
            return Err(StoreError::InvalidDirectory(
                expanded.display().to_string(),
            ));
        }

        let absolute = absolutize(&expanded)?.to_string_lossy().into_owned();

        let mut bookmarks = self.load();
        bookmarks.insert(name.to_string(), absolute.clone());
        self.save(&bookmarks)?;

        Ok(absolute)
    }

    /// Remove a bookmark
    ///
    /// # Errors
    /// Returns `NotFound` if the name is absent; the store file is left
    /// untouched in that case.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let mut bookmarks = self.load();

        if bookmarks.remove(name).is_none() {
            return Err(StoreError::NotFound(name.to_string()));
        }

        self.save(&bookmarks)
    }

    /// Look up the stored path for a bookmark name
    ///
    /// Returns the exact string recorded by `add`; the directory is not
    /// re-checked for existence.
    ///
    /// # Errors
    /// Returns `NotFound` if the name is absent.
    pub fn resolve(&self, name: &str) -> Result<String, StoreError> {
        self.load()
            .get(name)
            .map(str::to_string)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// All bookmarks sorted by name; an empty Vec means "no bookmarks"
    #[must_use]
    pub fn list(&self) -> Vec<(String, String)> {
        self.load()
            .iter()
            .map(|(name, path)| (name.clone(), path.clone()))
            .collect()
    }
}

/// Convert a path to absolute, normalized form without resolving symlinks
///
/// Relative paths are resolved from the current working directory; `.` and
/// `..` components are folded away lexically. Symlink components stay as
/// the user wrote them, so the stored path matches what was bookmarked.
fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            _ => normalized.push(component),
        }
    }

    Ok(normalized)
}

/// Expand a leading `~` and `$VAR`/`${VAR}` references in a raw path
///
/// The home marker is expanded first, then environment variables; references
/// to unset variables are left in place verbatim.
#[must_use]
pub fn expand_path(raw: &str) -> PathBuf {
    let with_home = expand_home(raw);
    PathBuf::from(expand_env_vars(&with_home))
}

fn expand_home(raw: &str) -> String {
    if raw == "~" {
        if let Some(home) = dirs::home_dir() {
            return home.to_string_lossy().into_owned();
        }
    } else if let Some(rest) = raw.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).to_string_lossy().into_owned();
        }
    }
    raw.to_string()
}

fn expand_env_vars(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(idx) = rest.find('$') {
        result.push_str(&rest[..idx]);
        let after = &rest[idx + 1..];

        // ${NAME} form
        if let Some(inner) = after.strip_prefix('{') {
            if let Some(end) = inner.find('}') {
                let name = &inner[..end];
                match std::env::var(name) {
                    Ok(value) => result.push_str(&value),
                    // Unset: keep "${NAME}" verbatim
                    Err(_) => result.push_str(&rest[idx..=idx + name.len() + 2]),
                }
                rest = &inner[end + 1..];
                continue;
            }
            // Unterminated "${": keep the remainder as-is
            result.push_str(&rest[idx..]);
            return result;
        }

        // $NAME form
        let name_len = after
            .bytes()
            .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
            .count();

        if name_len == 0 {
            result.push('$');
            rest = after;
            continue;
        }

        let name = &after[..name_len];
        match std::env::var(name) {
            Ok(value) => result.push_str(&value),
            Err(_) => {
                result.push('$');
                result.push_str(name);
            }
        }
        rest = &after[name_len..];
    }

    result.push_str(rest);
    result
}
