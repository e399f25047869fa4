//! Shutter speed entries and their validation
//!
//! A speed is entered either as a whole number of seconds (`"2"`) or as a
//! reciprocal fraction (`"1/250"`, `"1 / 250"`). The text is kept exactly as
//! typed; nothing here converts it to a number of seconds.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Whole-second count, e.g. `30`
static WHOLE_SECONDS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("Invalid whole seconds regex"));

/// Reciprocal fraction, with at most one space either side of the slash
static FRACTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^1 ?/ ?[0-9]+$").expect("Invalid fraction regex"));

/// Check whether a draft is an acceptable shutter speed
///
/// Digits are ASCII only; `"１２"` (full-width) is rejected.
pub fn validate(draft: &str) -> bool {
    WHOLE_SECONDS_PATTERN.is_match(draft) || FRACTION_PATTERN.is_match(draft)
}

/// How a speed entry was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedKind {
    WholeSeconds,
    Fraction,
}

/// A validated shutter speed, stored verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeedEntry(String);

impl SpeedEntry {
    /// Build an entry from raw text, or `None` if it does not validate
    pub fn parse(raw: &str) -> Option<Self> {
        validate(raw).then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> SpeedKind {
        if WHOLE_SECONDS_PATTERN.is_match(&self.0) {
            SpeedKind::WholeSeconds
        } else {
            SpeedKind::Fraction
        }
    }
}

impl fmt::Display for SpeedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_whole_seconds() {
        assert!(validate("250"));
        assert!(validate("1"));
        assert!(validate("0"));
    }

    #[test]
    fn test_validate_accepts_fractions() {
        assert!(validate("1/250"));
        assert!(validate("1 / 250"));
        assert!(validate("1 /250"));
        assert!(validate("1/ 250"));
    }

    #[test]
    fn test_validate_rejects_malformed() {
        assert!(!validate(""));
        assert!(!validate("1//250"));
        assert!(!validate("2/250"));
        assert!(!validate("1  / 250"));
        assert!(!validate("1/"));
        assert!(!validate("/250"));
        assert!(!validate(" 250"));
        assert!(!validate("250 "));
        assert!(!validate("1.5"));
        assert!(!validate("250\n"));
    }

    #[test]
    fn test_validate_rejects_non_ascii_digits() {
        assert!(!validate("١٢"));
        assert!(!validate("1/２５０"));
    }

    #[test]
    fn test_parse_keeps_text_verbatim() {
        let entry = SpeedEntry::parse("1 / 250").unwrap();
        assert_eq!(entry.as_str(), "1 / 250");
        assert_eq!(entry.kind(), SpeedKind::Fraction);
    }

    #[test]
    fn test_parse_agrees_with_validate() {
        for raw in ["250", "1/60", "1 / 8", "", "1//2", "abc", "10/2"] {
            assert_eq!(SpeedEntry::parse(raw).is_some(), validate(raw), "{raw:?}");
        }
    }

    #[test]
    fn test_whole_seconds_kind() {
        let entry = SpeedEntry::parse("30").unwrap();
        assert_eq!(entry.kind(), SpeedKind::WholeSeconds);
        assert_eq!(entry.to_string(), "30 s");
    }
}
