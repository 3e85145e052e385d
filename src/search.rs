//! One complete search: walk, filter, sort, limit
//!
//! Per-entry filesystem failures from the walker and from stat calls are
//! counted in `SearchOutcome::skipped`; they never stop the search.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use tracing::{debug, info};

use crate::error::{EntryAccessError, classify};
use crate::filter::{EntryMetadata, MatchCriteria, matches};
use crate::pipeline::{self, MatchRow, SortKey};
use crate::size::human_size;
use crate::walk::{FileEntry, WalkPolicy, walk};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Everything a search needs besides the root.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub policy: WalkPolicy,
    pub criteria: MatchCriteria,
    pub sort: SortKey,
    pub limit: Option<i64>,
    /// Report canonical absolute paths instead of root-relative ones
    pub absolute: bool,
}

/// Ordered rows plus the number of entries that could not be read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    pub rows: Vec<MatchRow>,
    pub skipped: usize,
}

/// Format a modification time in local time.
pub fn format_mtime(mtime: SystemTime) -> String {
    DateTime::<Local>::from(mtime).format(TIMESTAMP_FORMAT).to_string()
}

/// The path shown to the user for `path` found under `root`.
pub fn display_path(path: &Path, root: &Path, absolute: bool) -> String {
    if absolute {
        return path
            .canonicalize()
            .unwrap_or_else(|_| path.to_path_buf())
            .display()
            .to_string();
    }
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Check one entry against the criteria, statting it if needed.
///
/// `Ok(None)` means the entry was rejected. Stat failures come back as
/// `Err` so the caller can count them.
pub fn probe(
    entry: &FileEntry,
    root: &Path,
    options: &SearchOptions,
) -> Result<Option<MatchRow>, EntryAccessError> {
    let criteria = &options.criteria;
    if !criteria.matches_name(&entry.name) {
        return Ok(None);
    }

    let meta = fs::metadata(&entry.path).map_err(|e| classify(&entry.path, e))?;
    let modified = meta.modified().ok();
    let candidate = EntryMetadata {
        name: &entry.name,
        size: meta.len(),
        modified,
    };
    if !matches(&candidate, criteria) {
        return Ok(None);
    }

    Ok(Some(MatchRow {
        path: display_path(&entry.path, root, options.absolute),
        size_bytes: candidate.size,
        size_human: human_size(candidate.size),
        modified: modified.map(format_mtime).unwrap_or_default(),
    }))
}

/// Walk `root` and return the sorted, limited matches.
pub fn search(root: &Path, options: &SearchOptions) -> SearchOutcome {
    let mut rows = Vec::new();
    let mut skipped = 0;

    for item in walk(root, &options.policy) {
        let result = item.and_then(|entry| probe(&entry, root, options));
        match result {
            Ok(Some(row)) => rows.push(row),
            Ok(None) => {}
            Err(err) => {
                debug!(path = %err.path.display(), kind = err.kind.as_str(), "skipped");
                skipped += 1;
            }
        }
    }

    let matched = rows.len();
    let rows = pipeline::run(rows, options.sort, options.limit);
    info!(
        root = %root.display(),
        matched,
        shown = rows.len(),
        skipped,
        sort = %options.sort,
        "search finished"
    );

    SearchOutcome { rows, skipped }
}
