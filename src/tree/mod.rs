//! Directory tree traversal
//!
//! This module enumerates the directories below a root in a chosen order.
//! Files are never emitted here; listing them is the detector's job.
//!
//! - `TreeWalker`: stack-driven depth-first or queue-driven breadth-first walk

mod config;
mod utils;
mod walker;

pub use config::{TraversalOrder, WalkerConfig};
pub(crate) use utils::read_sorted_entries;
pub use utils::{glob_match, should_ignore_path, validate_root};
pub use walker::{TreeWalker, traverse};
