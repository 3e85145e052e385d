//! Result rows and the sort/limit stage
//!
//! Everything here is pure: rows in, rows out. Rendering happens downstream.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// One matched file, ready for rendering. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchRow {
    /// Display path, relative to the root unless absolute paths were requested
    pub path: String,
    pub size_bytes: u64,
    pub size_human: String,
    /// Local modification time, `YYYY-MM-DD HH:MM:SS`
    #[serde(rename = "mtime_iso")]
    pub modified: String,
}

/// Ordering applied before the limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Case-insensitive path, ascending
    #[default]
    Path,
    /// Byte size, largest first
    Size,
    /// Modification time, oldest first
    Mtime,
}

impl SortKey {
    /// Parse a key name, falling back to `Path` for anything unrecognized.
    pub fn parse_lenient(key: &str) -> Self {
        key.parse().unwrap_or_else(|_| {
            tracing::warn!(key, "unknown sort key, sorting by path");
            SortKey::Path
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Path => "path",
            SortKey::Size => "size",
            SortKey::Mtime => "mtime",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "path" => Ok(SortKey::Path),
            "size" => Ok(SortKey::Size),
            "mtime" => Ok(SortKey::Mtime),
            other => Err(format!("unknown sort key: {}", other)),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable in-place sort by `key`.
pub fn sort_rows(rows: &mut [MatchRow], key: SortKey) {
    match key {
        SortKey::Path => rows.sort_by_cached_key(|r| r.path.to_lowercase()),
        SortKey::Size => rows.sort_by(|a, b| b.size_bytes.cmp(&a.size_bytes)),
        // The fixed timestamp format orders lexicographically by time
        SortKey::Mtime => rows.sort_by(|a, b| a.modified.cmp(&b.modified)),
    }
}

/// Keep the first `limit` rows. A limit of zero or below empties the list.
pub fn apply_limit(rows: &mut Vec<MatchRow>, limit: Option<i64>) {
    if let Some(limit) = limit {
        let keep = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        rows.truncate(keep);
    }
}

/// Sort, then truncate.
pub fn run(mut rows: Vec<MatchRow>, key: SortKey, limit: Option<i64>) -> Vec<MatchRow> {
    sort_rows(&mut rows, key);
    apply_limit(&mut rows, limit);
    rows
}
