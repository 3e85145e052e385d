//! Search root resolution

use std::path::{Path, PathBuf};

use crate::error::SearchError;

/// Expand a leading `~` component using the given home directory.
///
/// Only the bare `~` form is expanded; `~user` is left alone. Paths are not
/// canonicalized.
pub fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) if rest.as_os_str().is_empty() => home.to_path_buf(),
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Turn the user-supplied root into the base path for a search.
///
/// `None` means the current directory. The path is not checked here: a root
/// that cannot be read is reported by the walk as one skipped path.
pub fn resolve_root(arg: Option<&Path>) -> Result<PathBuf, SearchError> {
    match arg {
        Some(path) => Ok(expand_home(path, dirs::home_dir().as_deref())),
        None => std::env::current_dir().map_err(SearchError::CurrentDir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_expand_home_variants() {
        let home = Path::new("/home/alice");
        assert_eq!(expand_home(Path::new("~"), Some(home)), PathBuf::from("/home/alice"));
        assert_eq!(
            expand_home(Path::new("~/Documents/Github"), Some(home)),
            PathBuf::from("/home/alice/Documents/Github")
        );
        // Not a leading component
        assert_eq!(expand_home(Path::new("a/~"), Some(home)), PathBuf::from("a/~"));
        assert_eq!(expand_home(Path::new("~bob/x"), Some(home)), PathBuf::from("~bob/x"));
    }

    #[test]
    fn test_expand_home_without_home_dir() {
        assert_eq!(expand_home(Path::new("~/x"), None), PathBuf::from("~/x"));
    }

    #[test]
    fn test_resolve_root_defaults_to_current_dir() {
        let root = resolve_root(None).unwrap();
        assert_eq!(root, std::env::current_dir().unwrap());
    }

    #[test]
    fn test_resolve_root_existing_dir() {
        let dir = TempDir::new().unwrap();
        let root = resolve_root(Some(dir.path())).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_resolve_root_does_not_require_existing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(resolve_root(Some(&missing)).unwrap(), missing);

        let file = dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        assert_eq!(resolve_root(Some(&file)).unwrap(), file);
    }
}
