//! Error types for size parsing, filesystem access and argument validation

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while parsing a human-readable size string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SizeError {
    /// The text is not `<number>[unit]`.
    #[error("invalid size {input:?}, examples: 5GB, 500MB, 120k, 123")]
    InvalidSizeFormat { input: String },

    /// A unit suffix is present but not recognized.
    #[error("unknown size unit {unit:?}, use: B, K/KB/KiB, M/MB/MiB, G/GB/GiB, T/TB/TiB, P/PB/PiB")]
    UnknownSizeUnit { unit: String },
}

/// Coarse classification of a filesystem failure on a single entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessErrorKind {
    PermissionDenied,
    /// The entry vanished between listing and access.
    NotFound,
    Other,
}

impl AccessErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AccessErrorKind::PermissionDenied => "permission denied",
            AccessErrorKind::NotFound => "not found",
            AccessErrorKind::Other => "filesystem error",
        }
    }
}

/// A non-fatal failure to read a directory or stat an entry.
///
/// These never abort a search. The walker and the probe hand them back as
/// `Err` items and the caller counts them.
#[derive(Debug, Error)]
#[error("{}: {}", path.display(), kind.as_str())]
pub struct EntryAccessError {
    pub path: PathBuf,
    pub kind: AccessErrorKind,
    #[source]
    pub source: io::Error,
}

/// Classify an I/O error raised while touching `path`.
pub fn classify(path: &Path, source: io::Error) -> EntryAccessError {
    let kind = match source.kind() {
        io::ErrorKind::PermissionDenied => AccessErrorKind::PermissionDenied,
        io::ErrorKind::NotFound => AccessErrorKind::NotFound,
        _ => AccessErrorKind::Other,
    };
    EntryAccessError {
        path: path.to_path_buf(),
        kind,
        source,
    }
}

/// Fatal argument errors. All of these are raised before any traversal
/// begins.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid {flag}: {source}")]
    Size {
        flag: &'static str,
        #[source]
        source: SizeError,
    },

    #[error("invalid {flag} duration {input:?}: {message}")]
    Duration {
        flag: &'static str,
        input: String,
        message: String,
    },

    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_permission_denied() {
        let err = classify(
            Path::new("/locked"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert_eq!(err.kind, AccessErrorKind::PermissionDenied);
        assert_eq!(err.path, PathBuf::from("/locked"));
        assert_eq!(err.to_string(), "/locked: permission denied");
    }

    #[test]
    fn test_classify_not_found_and_other() {
        let gone = classify(Path::new("gone"), io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(gone.kind, AccessErrorKind::NotFound);

        let other = classify(Path::new("x"), io::Error::other("boom"));
        assert_eq!(other.kind, AccessErrorKind::Other);
    }

    #[test]
    fn test_size_error_messages_name_the_input() {
        let err = SizeError::InvalidSizeFormat {
            input: "abc".to_string(),
        };
        assert!(err.to_string().contains("\"abc\""));

        let err = SizeError::UnknownSizeUnit {
            unit: "xq".to_string(),
        };
        assert!(err.to_string().contains("\"xq\""));
    }
}
