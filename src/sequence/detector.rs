//! SequenceDetector - classifies the files of each directory into sequences

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::tree::{TreeWalker, WalkerConfig, read_sorted_entries};

use super::descriptor::SequenceDescriptor;
use super::frame::{FrameName, SiblingMatcher, extension};

/// How files already attributed to a sequence are recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupMode {
    /// Skip files claimed as siblings, and any file whose path contains the
    /// base name (anchored at the file name) and the extension of an earlier
    /// descriptor in the same directory.
    #[default]
    Containment,
    /// Skip only files claimed as siblings of an earlier descriptor.
    Exact,
}

/// Configuration for sequence detection.
#[derive(Debug, Clone)]
pub struct DetectorConfig {
    pub dedup: DedupMode,
    /// Files whose names match any of these globs are not considered.
    pub ignore_patterns: Vec<String>,
    /// Number of parallel workers for per-directory detection.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    pub parallel_workers: usize,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            dedup: DedupMode::Containment,
            ignore_patterns: Vec::new(),
            parallel_workers: 0,
        }
    }
}

/// Detects sequences directory by directory.
///
/// Directories are independent: dedup never crosses a directory boundary, so
/// they can be scanned in parallel. Results are always concatenated in input
/// order.
pub struct SequenceDetector {
    config: DetectorConfig,
}

impl SequenceDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Scan `root` followed by every directory in `directories`.
    pub fn detect_sequences(
        &self,
        directories: &[PathBuf],
        root: &Path,
    ) -> Vec<SequenceDescriptor> {
        let mut dirs = Vec::with_capacity(directories.len() + 1);
        dirs.push(root);
        dirs.extend(directories.iter().map(PathBuf::as_path));

        let per_dir: Vec<Vec<SequenceDescriptor>> = match self.config.parallel_workers {
            1 => dirs.iter().map(|dir| self.detect_in_directory(dir)).collect(),
            // Auto-detect: use rayon's default thread pool
            0 => self.detect_parallel(&dirs),
            n => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                Ok(pool) => pool.install(|| self.detect_parallel(&dirs)),
                Err(err) => {
                    log::warn!("falling back to the global thread pool: {}", err);
                    self.detect_parallel(&dirs)
                }
            },
        };

        per_dir.into_iter().flatten().collect()
    }

    fn detect_parallel(&self, dirs: &[&Path]) -> Vec<Vec<SequenceDescriptor>> {
        // Indexed collect keeps the input order
        dirs.par_iter()
            .map(|dir| self.detect_in_directory(dir))
            .collect()
    }

    /// Detect the sequences of a single directory. An unreadable or vanished
    /// directory yields nothing.
    pub fn detect_in_directory(&self, dir: &Path) -> Vec<SequenceDescriptor> {
        let names = list_file_names(dir, &self.config.ignore_patterns);
        let sequences = group_sequences(dir, &names, self.config.dedup);
        if !sequences.is_empty() {
            log::debug!("{}: {} sequence(s)", dir.display(), sequences.len());
        }
        sequences
    }
}

/// Names of the regular files in `dir`, sorted.
fn list_file_names(dir: &Path, ignore_patterns: &[String]) -> Vec<String> {
    let Some(entries) = read_sorted_entries(dir, ignore_patterns) else {
        return Vec::new();
    };

    entries
        .into_iter()
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| match entry.file_name().into_string() {
            Ok(name) => Some(name),
            Err(raw) => {
                log::trace!("skipping non UTF-8 file name {:?}", raw);
                None
            }
        })
        .collect()
}

/// Group the file names of one directory into sequences.
///
/// `names` must be sorted; each file not yet covered becomes the trigger of a
/// new descriptor that claims every sibling with the same prefix, suffix and
/// digit width.
pub fn group_sequences(
    dir: &Path,
    names: &[String],
    dedup: DedupMode,
) -> Vec<SequenceDescriptor> {
    let mut found: Vec<SequenceDescriptor> = Vec::new();
    let mut claimed: HashSet<&str> = HashSet::new();

    for name in names {
        if claimed.contains(name.as_str()) {
            continue;
        }
        if dedup == DedupMode::Containment
            && found.iter().any(|seq| seq.covers(&dir.join(name)))
        {
            log::trace!("{} already covered", name);
            continue;
        }

        let Some(frame_name) = FrameName::parse(name) else {
            log::trace!("{} has no frame number", name);
            continue;
        };
        if frame_name.frame().is_none() {
            log::trace!("{} has an unparseable frame number", name);
            continue;
        }

        let matcher = SiblingMatcher::new(&frame_name);
        let mut first_frame = u64::MAX;
        let mut last_frame: u64 = 0;
        let mut frame_count = 0;
        for sibling in names {
            if let Some(frame) = matcher.frame_of(sibling) {
                first_frame = first_frame.min(frame);
                last_frame = last_frame.max(frame);
                frame_count += 1;
                claimed.insert(sibling.as_str());
            }
        }

        // The trigger always matches itself
        if frame_count == 0 {
            continue;
        }

        found.push(SequenceDescriptor {
            base_directory: dir.to_path_buf(),
            base_name: frame_name.prefix.to_string(),
            padding: frame_name.padding(),
            suffix: frame_name.suffix.to_string(),
            extension: extension(name).to_string(),
            first_frame,
            last_frame,
            frame_count,
        });
    }

    found
}

/// Scan `root` and the given directories with default settings.
pub fn detect_sequences(directories: &[PathBuf], root: &Path) -> Vec<SequenceDescriptor> {
    SequenceDetector::new(DetectorConfig::default()).detect_sequences(directories, root)
}

/// Walk `root` and detect sequences in it and in every directory below it.
pub fn find_sequences(
    root: &Path,
    walker_config: &WalkerConfig,
    detector_config: &DetectorConfig,
) -> Vec<SequenceDescriptor> {
    let directories = TreeWalker::new(walker_config.clone()).traverse(root);
    log::info!("scanning {} directories", directories.len() + 1);
    SequenceDetector::new(detector_config.clone()).detect_sequences(&directories, root)
}
