//! Directory traversal
//!
//! The walker is an explicit-stack, pull-based iterator over the files under a
//! root. It never recurses and never aborts on a single unreadable entry:
//! failures come back as `Err` items so the caller can count them.
//!
//! - `policy` - `WalkPolicy` and the `SkipSet` of excluded directory names
//! - `entry` - `FileEntry` yielded for each file
//! - `walker` - the `Walker` iterator itself

mod entry;
mod policy;
mod walker;

pub use entry::FileEntry;
pub use policy::{DEFAULT_SKIP_DIRS, SkipSet, WalkPolicy, is_hidden};
pub use walker::{Walker, walk};
