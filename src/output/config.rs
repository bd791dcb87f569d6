//! Output configuration types

use std::path::PathBuf;

/// Configuration for output formatting.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Append a "N sequences, M frames" footer
    pub show_summary: bool,
    /// Show sequence paths relative to this directory when they are below it
    pub relative_to: Option<PathBuf>,
}
