//! JSON output formatting

use std::io;

use crate::sequence::SequenceDescriptor;

/// Serialize descriptors as a pretty-printed JSON array.
pub fn to_json(sequences: &[SequenceDescriptor]) -> io::Result<String> {
    serde_json::to_string_pretty(sequences).map_err(io::Error::other)
}

/// Print descriptors as pretty-printed JSON to stdout.
pub fn print_json(sequences: &[SequenceDescriptor]) -> io::Result<()> {
    println!("{}", to_json(sequences)?);
    Ok(())
}
