//! Entries produced by the walker

use std::path::PathBuf;

/// A filesystem object discovered during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path: the root joined with every component down to this entry.
    pub path: PathBuf,
    /// Base name, lossily converted to UTF-8.
    pub name: String,
    pub is_dir: bool,
}

impl FileEntry {
    pub fn file(path: PathBuf, name: String) -> Self {
        Self {
            path,
            name,
            is_dir: false,
        }
    }
}
