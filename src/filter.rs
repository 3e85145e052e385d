//! Match criteria applied to each walked file
//!
//! Name criteria are checked before any stat call so that most entries are
//! rejected without touching their metadata.

use std::path::Path;
use std::time::SystemTime;

/// Inclusive byte-size bounds. `min > max` is allowed and matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeRange {
    pub min_bytes: Option<u64>,
    pub max_bytes: Option<u64>,
}

impl SizeRange {
    pub fn new(min_bytes: Option<u64>, max_bytes: Option<u64>) -> Self {
        Self {
            min_bytes,
            max_bytes,
        }
    }

    pub fn contains(&self, size: u64) -> bool {
        self.min_bytes.is_none_or(|min| size >= min)
            && self.max_bytes.is_none_or(|max| size <= max)
    }
}

/// Inclusive modification-time bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    /// Only files modified at or after this instant
    pub newer_than: Option<SystemTime>,
    /// Only files modified at or before this instant
    pub older_than: Option<SystemTime>,
}

impl TimeRange {
    pub fn contains(&self, mtime: SystemTime) -> bool {
        self.newer_than.is_none_or(|t| mtime >= t)
            && self.older_than.is_none_or(|t| mtime <= t)
    }
}

/// Lowercase an extension filter and strip leading dots. Empty means no filter.
pub fn normalize_extension(ext: Option<&str>) -> Option<String> {
    ext.map(|e| e.trim().trim_start_matches('.').to_lowercase())
        .filter(|e| !e.is_empty())
}

/// The metadata a file is judged on.
#[derive(Debug, Clone, Copy)]
pub struct EntryMetadata<'a> {
    pub name: &'a str,
    pub size: u64,
    /// `None` when the platform cannot report it; time bounds then pass.
    pub modified: Option<SystemTime>,
}

/// All supplied criteria are ANDed; absent criteria impose nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchCriteria {
    substring: Option<String>,
    extension: Option<String>,
    pub size: SizeRange,
    pub modified: TimeRange,
}

impl MatchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring of the base name.
    pub fn with_substring(mut self, substring: Option<&str>) -> Self {
        self.substring = substring.filter(|s| !s.is_empty()).map(str::to_lowercase);
        self
    }

    /// Case-insensitive extension, with or without a leading dot.
    pub fn with_extension(mut self, ext: Option<&str>) -> Self {
        self.extension = normalize_extension(ext);
        self
    }

    pub fn with_size(mut self, size: SizeRange) -> Self {
        self.size = size;
        self
    }

    pub fn with_modified(mut self, modified: TimeRange) -> Self {
        self.modified = modified;
        self
    }

    /// Substring and extension checks, which need no metadata.
    pub fn matches_name(&self, name: &str) -> bool {
        if let Some(sub) = &self.substring {
            if !name.to_lowercase().contains(sub.as_str()) {
                return false;
            }
        }
        if let Some(ext) = &self.extension {
            let actual = Path::new(name)
                .extension()
                .map(|e| e.to_string_lossy().to_lowercase())
                .unwrap_or_default();
            if actual != *ext {
                return false;
            }
        }
        true
    }

    pub fn matches_metadata(&self, size: u64, modified: Option<SystemTime>) -> bool {
        if !self.size.contains(size) {
            return false;
        }
        match modified {
            Some(mtime) => self.modified.contains(mtime),
            None => true,
        }
    }
}

/// Judge one file against the criteria.
pub fn matches(meta: &EntryMetadata<'_>, criteria: &MatchCriteria) -> bool {
    criteria.matches_name(meta.name) && criteria.matches_metadata(meta.size, meta.modified)
}
