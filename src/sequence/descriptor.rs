//! Sequence descriptor, the unit of detection output

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Placeholder used for each frame digit when printing a pattern.
pub const FRAME_PLACEHOLDER: char = '#';

/// One detected file sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SequenceDescriptor {
    /// Directory containing the frames
    pub base_directory: PathBuf,
    /// File name text before the frame token
    pub base_name: String,
    /// Digit width of the frame token
    pub padding: usize,
    /// File name text after the frame token, extension included
    pub suffix: String,
    /// Text after the last `.` of the file name
    pub extension: String,
    pub first_frame: u64,
    pub last_frame: u64,
    /// Number of member files
    pub frame_count: usize,
}

impl SequenceDescriptor {
    /// File name with the frame token replaced by placeholders,
    /// e.g. `image.####.exr`.
    pub fn pattern(&self) -> String {
        let mut pattern =
            String::with_capacity(self.base_name.len() + self.padding + self.suffix.len());
        pattern.push_str(&self.base_name);
        pattern.extend(std::iter::repeat_n(FRAME_PLACEHOLDER, self.padding));
        pattern.push_str(&self.suffix);
        pattern
    }

    /// Full path of the pattern.
    pub fn path_pattern(&self) -> PathBuf {
        self.base_directory.join(self.pattern())
    }

    pub fn frame_range(&self) -> RangeInclusive<u64> {
        self.first_frame..=self.last_frame
    }

    /// Name of the file holding `frame`.
    pub fn frame_path(&self, frame: u64) -> PathBuf {
        self.base_directory.join(format!(
            "{}{:0width$}{}",
            self.base_name,
            frame,
            self.suffix,
            width = self.padding
        ))
    }

    /// Coarse membership test: a file counts as covered when its path
    /// contains both this descriptor's base name and its extension.
    ///
    /// Within one directory "the path contains `dir/base_name`" is the same as
    /// "the file name starts with `base_name`", so that half is anchored. The
    /// extension may match anywhere in the path, directory part included.
    pub fn covers(&self, path: &Path) -> bool {
        let starts_with_base = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().starts_with(&self.base_name));
        starts_with_base && path.to_string_lossy().contains(&self.extension)
    }
}
