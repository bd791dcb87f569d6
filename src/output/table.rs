//! Table formatter
//!
//! One row per sequence: the pattern path, padded to a shared column width,
//! followed by the frame range.
//!
//! ```text
//! shots/sh010/image.####.exr     (1-3)
//! shots/sh020/plate_###.dpx      (101-148)
//! ```

use std::io::{self, Write};
use std::path::PathBuf;

use termcolor::{Color, ColorChoice, ColorSpec, NoColor, StandardStream, WriteColor};

use crate::sequence::SequenceDescriptor;

use super::config::OutputConfig;

/// Spaces added after the longest name.
pub const COLUMN_MARGIN: usize = 5;

/// Formatter for the sequence table.
pub struct TableFormatter {
    config: OutputConfig,
}

impl TableFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the table without colors.
    pub fn format(&self, sequences: &[SequenceDescriptor]) -> String {
        let mut out = NoColor::new(Vec::new());
        self.write_to(&mut out, sequences).expect("writing into a Vec cannot fail");
        String::from_utf8_lossy(&out.into_inner()).into_owned()
    }

    pub fn print(&self, sequences: &[SequenceDescriptor]) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let stdout = StandardStream::stdout(choice);
        let mut lock = stdout.lock();
        self.write_to(&mut lock, sequences)
    }

    /// Write the table to any color-capable writer. Nothing is written for an
    /// empty list.
    pub fn write_to<W: WriteColor>(
        &self,
        out: &mut W,
        sequences: &[SequenceDescriptor],
    ) -> io::Result<()> {
        if sequences.is_empty() {
            return Ok(());
        }

        let names: Vec<String> = sequences.iter().map(|s| self.display_name(s)).collect();
        let width = names
            .iter()
            .map(|n| n.chars().count())
            .max()
            .unwrap_or(0)
            + COLUMN_MARGIN;

        let mut name_color = ColorSpec::new();
        name_color.set_fg(Some(Color::Cyan));
        let mut range_color = ColorSpec::new();
        range_color.set_fg(Some(Color::Green));

        for (name, seq) in names.iter().zip(sequences) {
            out.set_color(&name_color)?;
            write!(out, "{:<width$}", name, width = width)?;
            out.set_color(&range_color)?;
            write!(out, "({}-{})", seq.first_frame, seq.last_frame)?;
            out.reset()?;
            writeln!(out)?;
        }

        if self.config.show_summary {
            let frames: usize = sequences.iter().map(|s| s.frame_count).sum();
            writeln!(out)?;
            writeln!(out, "{} sequences, {} frames", sequences.len(), frames)?;
        }

        Ok(())
    }

    fn display_name(&self, seq: &SequenceDescriptor) -> String {
        let full = seq.path_pattern();
        let shown: PathBuf = match &self.config.relative_to {
            Some(base) => full
                .strip_prefix(base)
                .map(|p| p.to_path_buf())
                .unwrap_or(full),
            None => full,
        };
        shown.to_string_lossy().into_owned()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn seq(
        dir: &str,
        base: &str,
        padding: usize,
        suffix: &str,
        range: (u64, u64),
    ) -> SequenceDescriptor {
        SequenceDescriptor {
            base_directory: PathBuf::from(dir),
            base_name: base.to_string(),
            padding,
            suffix: suffix.to_string(),
            extension: suffix.rsplit('.').next().unwrap_or("").to_string(),
            first_frame: range.0,
            last_frame: range.1,
            frame_count: (range.1 - range.0 + 1) as usize,
        }
    }

    #[test]
    fn test_format_aligns_columns() {
        let formatter = TableFormatter::new(OutputConfig::default());
        let out = formatter.format(&[
            seq("a", "image.", 4, ".exr", (1, 3)),
            seq("a/long", "plate_", 3, ".dpx", (101, 148)),
        ]);
        // Longest name "a/long/plate_###.dpx" is 20 chars, plus the margin
        assert_eq!(
            out,
            "a/image.####.exr         (1-3)\na/long/plate_###.dpx     (101-148)\n"
        );
    }

    #[test]
    fn test_format_relative_to_root() {
        let formatter = TableFormatter::new(OutputConfig {
            relative_to: Some(PathBuf::from("/renders")),
            ..Default::default()
        });
        let out = formatter.format(&[
            seq("/renders/sh010", "beauty.", 4, ".exr", (1, 24)),
            seq("/elsewhere", "x", 2, ".png", (5, 5)),
        ]);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("sh010/beauty.####.exr"));
        assert!(lines[1].starts_with("/elsewhere/x##.png"));
        assert!(lines[1].ends_with("(5-5)"));
    }

    #[test]
    fn test_format_empty() {
        let formatter = TableFormatter::new(OutputConfig {
            show_summary: true,
            ..Default::default()
        });
        assert_eq!(formatter.format(&[]), "");
    }

    #[test]
    fn test_format_summary() {
        let formatter = TableFormatter::new(OutputConfig {
            show_summary: true,
            ..Default::default()
        });
        let out = formatter.format(&[
            seq("d", "a.", 2, ".png", (1, 10)),
            seq("d", "b.", 2, ".png", (1, 5)),
        ]);
        assert!(out.ends_with("\n2 sequences, 15 frames\n"), "got: {}", out);
    }
}
