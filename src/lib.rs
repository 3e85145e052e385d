//! Superquick - recursive file search by name, extension and size
//!
//! The core is a pipeline: [`walk`] yields files, [`filter`] judges them,
//! [`pipeline`] sorts and limits the resulting rows, and [`output`] renders
//! them. [`search::search`] runs the whole thing for one root.

pub mod error;
pub mod filter;
pub mod output;
pub mod pipeline;
pub mod root;
pub mod search;
pub mod size;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{AccessErrorKind, EntryAccessError, SearchError, SizeError};
pub use filter::{EntryMetadata, MatchCriteria, SizeRange, TimeRange, matches};
pub use output::{OutputConfig, OutputFormat, Printer, render};
pub use pipeline::{MatchRow, SortKey};
pub use root::resolve_root;
pub use search::{SearchOptions, SearchOutcome, search};
pub use size::{human_size, parse_size};
pub use walk::{FileEntry, SkipSet, WalkPolicy, Walker, walk};
