//! Sequence report formatting
//!
//! - `config` - Output configuration types
//! - `table` - Aligned text table, optionally colored
//! - `json` - JSON output

mod config;
mod json;
mod table;

pub use config::OutputConfig;
pub use json::{print_json, to_json};
pub use table::{COLUMN_MARGIN, TableFormatter};
