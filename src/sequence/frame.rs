//! Frame token parsing
//!
//! A frame token is the last maximal run of ASCII digits in a file name.
//! Everything before it is the prefix, everything after it (extension
//! included) is the suffix.

use std::sync::LazyLock;

use regex::Regex;

static FRAME_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("FRAME_TOKEN regex is invalid"));

/// A file name split around its frame token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameName<'a> {
    pub prefix: &'a str,
    pub digits: &'a str,
    pub suffix: &'a str,
}

impl<'a> FrameName<'a> {
    /// Split `name` at its last digit run. Returns `None` if the name has no
    /// digits at all.
    pub fn parse(name: &'a str) -> Option<Self> {
        let token = FRAME_TOKEN.find_iter(name).last()?;
        Some(Self {
            prefix: &name[..token.start()],
            digits: token.as_str(),
            suffix: &name[token.end()..],
        })
    }

    /// Digit width of the token, leading zeros included.
    pub fn padding(&self) -> usize {
        self.digits.len()
    }

    /// Numeric frame value, `None` if the token overflows `u64`.
    pub fn frame(&self) -> Option<u64> {
        self.digits.parse().ok()
    }
}

/// Recognizes members of the sequence a given file belongs to: same prefix,
/// same suffix, and exactly `padding` digits in between.
#[derive(Debug, Clone, Copy)]
pub struct SiblingMatcher<'a> {
    prefix: &'a str,
    padding: usize,
    suffix: &'a str,
}

impl<'a> SiblingMatcher<'a> {
    pub fn new(name: &FrameName<'a>) -> Self {
        Self {
            prefix: name.prefix,
            padding: name.padding(),
            suffix: name.suffix,
        }
    }

    /// Frame value of `name` if it belongs to this sequence.
    pub fn frame_of(&self, name: &str) -> Option<u64> {
        let token = name
            .strip_prefix(self.prefix)?
            .strip_suffix(self.suffix)?;
        if token.len() != self.padding || !token.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        token.parse().ok()
    }
}

/// Text after the last `.` of a file name, or `""` if there is none.
pub fn extension(name: &str) -> &str {
    name.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dotted_frame() {
        let name = FrameName::parse("image.0001.exr").unwrap();
        assert_eq!(name.prefix, "image.");
        assert_eq!(name.digits, "0001");
        assert_eq!(name.suffix, ".exr");
        assert_eq!(name.padding(), 4);
        assert_eq!(name.frame(), Some(1));
    }

    #[test]
    fn test_parse_without_separator() {
        let name = FrameName::parse("image0001.exr").unwrap();
        assert_eq!(name.prefix, "image");
        assert_eq!(name.suffix, ".exr");
    }

    #[test]
    fn test_parse_uses_last_digit_run() {
        let name = FrameName::parse("v2_image.0001.exr").unwrap();
        assert_eq!(name.prefix, "v2_image.");
        assert_eq!(name.digits, "0001");

        // Same digits earlier in the name must not shift the split point
        let name = FrameName::parse("0001_plate.0001.dpx").unwrap();
        assert_eq!(name.prefix, "0001_plate.");
        assert_eq!(name.suffix, ".dpx");
    }

    #[test]
    fn test_parse_no_digits() {
        assert!(FrameName::parse("readme.txt").is_none());
        assert!(FrameName::parse("").is_none());
    }

    #[test]
    fn test_parse_ignores_non_ascii_digits() {
        // Arabic-Indic digits are not frame tokens
        assert!(FrameName::parse("frame.\u{0661}\u{0662}.exr").is_none());
    }

    #[test]
    fn test_frame_overflow() {
        let name = FrameName::parse("big.99999999999999999999999.exr").unwrap();
        assert_eq!(name.frame(), None);
    }

    #[test]
    fn test_sibling_matcher() {
        let name = FrameName::parse("image.0002.exr").unwrap();
        let matcher = SiblingMatcher::new(&name);
        assert_eq!(matcher.frame_of("image.0002.exr"), Some(2));
        assert_eq!(matcher.frame_of("image.0100.exr"), Some(100));
        assert_eq!(matcher.frame_of("image.100.exr"), None);
        assert_eq!(matcher.frame_of("image.00100.exr"), None);
        assert_eq!(matcher.frame_of("image.00a1.exr"), None);
        assert_eq!(matcher.frame_of("image.0001.dpx"), None);
        assert_eq!(matcher.frame_of("other.0001.exr"), None);
    }

    #[test]
    fn test_extension() {
        assert_eq!(extension("image.0001.exr"), "exr");
        assert_eq!(extension("archive.tar.gz"), "gz");
        assert_eq!(extension("frame0001"), "");
        assert_eq!(extension("trailing."), "");
    }
}
