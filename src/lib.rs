//! Seqfind - finds numbered file sequences (render frames) in a directory tree

pub mod error;
pub mod output;
pub mod sequence;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, SeqfindError};
pub use output::{OutputConfig, TableFormatter, print_json, to_json};
pub use sequence::{
    DedupMode, DetectorConfig, SequenceDescriptor, SequenceDetector, detect_sequences,
    find_sequences,
};
pub use tree::{TraversalOrder, TreeWalker, WalkerConfig, traverse, validate_root};
