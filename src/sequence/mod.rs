//! File sequence detection
//!
//! Groups the regular files of each directory into numbered sequences.
//!
//! - `frame` - frame token splitting and sibling matching
//! - `descriptor` - `SequenceDescriptor`, the unit of output
//! - `detector` - per-directory grouping, dedup policy and parallel fan-out

mod descriptor;
mod detector;
mod frame;

pub use descriptor::{FRAME_PLACEHOLDER, SequenceDescriptor};
pub use detector::{
    DedupMode, DetectorConfig, SequenceDetector, detect_sequences, find_sequences, group_sequences,
};
pub use frame::{FrameName, SiblingMatcher, extension};
