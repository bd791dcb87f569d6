//! Shared utility functions for tree walking

use std::fs::DirEntry;
use std::path::{Path, PathBuf};

use glob::Pattern;

use crate::error::{Result, SeqfindError};

/// Check that `path` is an existing directory and return it unchanged.
pub fn validate_root(path: &Path) -> Result<PathBuf> {
    let meta = std::fs::metadata(path).map_err(|e| SeqfindError::io(path, e))?;
    if !meta.is_dir() {
        return Err(SeqfindError::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(path.to_path_buf())
}

/// Check if a path should be ignored based on its name and ignore patterns.
pub fn should_ignore_path(path: &Path, ignore_patterns: &[String]) -> bool {
    if ignore_patterns.is_empty() {
        return false;
    }

    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    ignore_patterns
        .iter()
        .any(|pattern| name == *pattern || glob_match(pattern, &name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}

/// Read a directory, drop ignored entries and sort the rest by name.
///
/// Returns `None` when the directory cannot be read. The handle is closed
/// before returning.
pub(crate) fn read_sorted_entries(
    path: &Path,
    ignore_patterns: &[String],
) -> Option<Vec<DirEntry>> {
    let entries = match std::fs::read_dir(path) {
        Ok(e) => e,
        Err(err) => {
            log::debug!("skipping unreadable directory {}: {}", path.display(), err);
            return None;
        }
    };

    let mut entries: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|entry| !should_ignore_path(&entry.path(), ignore_patterns))
        .collect();
    entries.sort_by_key(|a| a.file_name());

    Some(entries)
}
