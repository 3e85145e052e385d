//! Iterative directory walker

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::vec;

use tracing::{debug, trace};

use crate::error::{EntryAccessError, classify};

use super::entry::FileEntry;
use super::policy::{WalkPolicy, is_hidden};

type WalkItem = Result<FileEntry, EntryAccessError>;

/// Start a walk of `root` under `policy`.
pub fn walk<'a>(root: &Path, policy: &'a WalkPolicy) -> Walker<'a> {
    Walker::new(root, policy)
}

/// Canonical paths from the root down to a queued directory. Only built
/// when following symlinks, where a link back up the tree would otherwise
/// loop forever.
struct Ancestry {
    canonical: PathBuf,
    parent: Option<Rc<Ancestry>>,
}

impl Ancestry {
    fn contains(&self, dir: &Path) -> bool {
        let mut current = Some(self);
        while let Some(node) = current {
            if node.canonical == dir {
                return true;
            }
            current = node.parent.as_deref();
        }
        false
    }
}

/// Pull-based iterator over the files below a root.
///
/// Directories are processed from an explicit stack, so sibling order is
/// effectively reverse discovery order and no ordering is promised. Each
/// directory is read in one batch and its handle closed before any of its
/// results are handed out. A walker is single-use.
///
/// A directory that cannot be read yields exactly one `Err` and the walk
/// moves on to the rest of the stack.
pub struct Walker<'a> {
    policy: &'a WalkPolicy,
    stack: Vec<(PathBuf, Option<Rc<Ancestry>>)>,
    pending: vec::IntoIter<WalkItem>,
}

impl<'a> Walker<'a> {
    pub fn new(root: &Path, policy: &'a WalkPolicy) -> Self {
        let ancestry = if policy.follow_symlinks {
            root.canonicalize().ok().map(|canonical| {
                Rc::new(Ancestry {
                    canonical,
                    parent: None,
                })
            })
        } else {
            None
        };
        Self {
            policy,
            stack: vec![(root.to_path_buf(), ancestry)],
            pending: Vec::new().into_iter(),
        }
    }

    /// Read one directory, queueing subdirectories and collecting files.
    fn read_dir(&mut self, dir: &Path, ancestry: Option<Rc<Ancestry>>) -> Vec<WalkItem> {
        let mut out = Vec::new();

        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                let err = classify(dir, e);
                debug!(path = %dir.display(), kind = err.kind.as_str(), "cannot read directory");
                out.push(Err(err));
                return out;
            }
        };

        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // A failure mid-listing ends this directory; the handle is
                    // dropped on return.
                    let err = classify(dir, e);
                    debug!(
                        path = %dir.display(),
                        kind = err.kind.as_str(),
                        "directory listing failed"
                    );
                    out.push(Err(err));
                    break;
                }
            };

            let name = entry.file_name().to_string_lossy().into_owned();
            if self.policy.ignore_hidden && is_hidden(&name) {
                continue;
            }

            let path = entry.path();
            let kind = match self.classify_entry(&entry, &path) {
                Ok(Some(kind)) => kind,
                Ok(None) => continue,
                Err(err) => {
                    debug!(
                        path = %path.display(),
                        kind = err.kind.as_str(),
                        "cannot classify entry"
                    );
                    out.push(Err(err));
                    continue;
                }
            };

            match kind {
                EntryKind::Dir => {
                    if self.policy.skip_dirs.contains(&name) {
                        trace!(path = %path.display(), "skip-listed directory");
                        continue;
                    }
                    let Some(child) = descend(&path, ancestry.as_ref()) else {
                        debug!(path = %path.display(), "symlink cycle, not descending");
                        continue;
                    };
                    trace!(path = %path.display(), "queue directory");
                    self.stack.push((path, child));
                }
                EntryKind::File => out.push(Ok(FileEntry::file(path, name))),
            }
        }

        out
    }

    /// Decide whether a child is a directory to descend, a file to yield, or
    /// neither.
    ///
    /// Symlinks are resolved by their target. Without `follow_symlinks` a link
    /// is never descended, but a link to a regular file is still yielded.
    /// Dangling or unresolvable links are skipped without counting an error.
    fn classify_entry(
        &self,
        entry: &fs::DirEntry,
        path: &Path,
    ) -> Result<Option<EntryKind>, EntryAccessError> {
        let file_type = entry.file_type().map_err(|e| classify(path, e))?;

        if !file_type.is_symlink() {
            return Ok(if file_type.is_dir() {
                Some(EntryKind::Dir)
            } else if file_type.is_file() {
                Some(EntryKind::File)
            } else {
                None
            });
        }

        let target = match fs::metadata(path) {
            Ok(meta) => meta,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "unresolvable symlink");
                return Ok(None);
            }
        };

        Ok(if target.is_dir() && self.policy.follow_symlinks {
            Some(EntryKind::Dir)
        } else if target.is_file() {
            Some(EntryKind::File)
        } else {
            None
        })
    }
}

/// Ancestry for a subdirectory about to be queued.
///
/// Returns `None` when the directory resolves to one of its own ancestors.
/// Without ancestry tracking every directory may be descended.
fn descend(dir: &Path, ancestry: Option<&Rc<Ancestry>>) -> Option<Option<Rc<Ancestry>>> {
    let Some(parent) = ancestry else {
        return Some(None);
    };
    match dir.canonicalize() {
        Ok(canonical) if parent.contains(&canonical) => None,
        Ok(canonical) => Some(Some(Rc::new(Ancestry {
            canonical,
            parent: Some(Rc::clone(parent)),
        }))),
        // Let the read itself report the failure
        Err(_) => Some(Some(Rc::clone(parent))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
}

impl Iterator for Walker<'_> {
    type Item = WalkItem;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.pending.next() {
                return Some(item);
            }
            let (dir, ancestry) = self.stack.pop()?;
            self.pending = self.read_dir(&dir, ancestry).into_iter();
        }
    }
}
