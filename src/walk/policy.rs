//! Traversal policy: hidden entries, symlinks, and skipped directories

use std::collections::HashSet;

use glob::Pattern;

/// Heavy directories excluded from descent unless `--no-skip` is given.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    ".venv",
    "venv",
    "__pycache__",
    ".pytest_cache",
    ".mypy_cache",
    ".ruff_cache",
    "dist",
    "build",
    ".tox",
];

/// Directory basenames excluded from descent.
///
/// Entries containing glob metacharacters (`*`, `?`, `[`) are matched as
/// patterns against the basename; everything else must match exactly.
#[derive(Debug, Clone, Default)]
pub struct SkipSet {
    names: HashSet<String>,
    patterns: Vec<Pattern>,
}

impl SkipSet {
    /// A skip set that excludes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in list of version-control, cache and build directories.
    pub fn defaults() -> Self {
        DEFAULT_SKIP_DIRS
            .iter()
            .fold(Self::empty(), |set, name| set.with_entry(name))
    }

    /// Add a name or glob pattern.
    pub fn with_entry(mut self, entry: &str) -> Self {
        let is_pattern = entry.contains(['*', '?', '[']);
        match Pattern::new(entry) {
            Ok(pattern) if is_pattern => self.patterns.push(pattern),
            Ok(_) => {
                self.names.insert(entry.to_string());
            }
            Err(e) => {
                tracing::warn!(entry, error = %e, "invalid skip pattern, matching literally");
                self.names.insert(entry.to_string());
            }
        }
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name) || self.patterns.iter().any(|p| p.matches(name))
    }
}

impl<'a> FromIterator<&'a str> for SkipSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, entry| set.with_entry(entry))
    }
}

/// Immutable snapshot of traversal behavior for one walk.
#[derive(Debug, Clone)]
pub struct WalkPolicy {
    /// Classify symlinks by their target and descend into linked directories.
    pub follow_symlinks: bool,
    /// Skip entries whose name starts with `.`, and never descend into them.
    pub ignore_hidden: bool,
    pub skip_dirs: SkipSet,
}

impl Default for WalkPolicy {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            ignore_hidden: true,
            skip_dirs: SkipSet::defaults(),
        }
    }
}

/// Whether a base name carries the hidden-file marker.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}
