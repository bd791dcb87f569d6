//! Test utilities for building temporary directory trees of frame files.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The tree is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a directory (and its parents) relative to the root.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dirs");
        full_path
    }

    /// Create an empty file, creating parent directories as needed.
    pub fn add_file(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, "").expect("Failed to write file");
        full_path
    }

    /// Create one file per frame, named `{prefix}{frame:0padding$}{suffix}`
    /// inside `dir`.
    pub fn add_frames(
        &self,
        dir: &str,
        prefix: &str,
        padding: usize,
        suffix: &str,
        frames: RangeInclusive<u64>,
    ) -> Vec<PathBuf> {
        let base = self.add_dir(dir);
        frames
            .map(|frame| {
                let path = base.join(format!(
                    "{}{:0width$}{}",
                    prefix,
                    frame,
                    suffix,
                    width = padding
                ));
                fs::write(&path, "").expect("Failed to write frame");
                path
            })
            .collect()
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
