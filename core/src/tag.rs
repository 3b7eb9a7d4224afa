//! Player and club tag normalization.

use std::fmt;
use std::str::FromStr;

use crate::error::ApiError;

/// Characters the game uses when issuing tags.
pub const TAG_CHARS: &str = "0289PYLQGRJCUV";

/// Shortest tag the game issues.
pub const MIN_TAG_LEN: usize = 3;

/// A normalized player or club tag, without the leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

impl Tag {
    /// Normalize and validate `raw`.
    ///
    /// A leading `#` is dropped, letters are upper-cased and `O` is read as
    /// the digit `0`, which is how tags are commonly mistyped.
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let normalized: String = raw
            .trim()
            .trim_start_matches('#')
            .to_ascii_uppercase()
            .replace('O', "0");

        if normalized.chars().count() < MIN_TAG_LEN {
            return Err(ApiError::invalid_tag(
                raw,
                format!("shorter than {MIN_TAG_LEN} characters"),
            ));
        }

        let invalid: String = normalized.chars().filter(|c| !TAG_CHARS.contains(*c)).collect();
        if !invalid.is_empty() {
            return Err(ApiError::invalid_tag(raw, format!("invalid characters {invalid:?}")));
        }

        Ok(Tag(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Tag {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::parse(s)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Tag {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strip the `#` the API prefixes to tags in response bodies.
pub(crate) fn strip_hash(tag: &str) -> String {
    tag.trim_start_matches('#').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_tags() {
        assert_eq!(Tag::parse("GGJVJLU2").unwrap().as_str(), "GGJVJLU2");
        assert_eq!(Tag::parse("QCGV8PG").unwrap().as_str(), "QCGV8PG");
        assert_eq!(Tag::parse("2PPPPPPP").unwrap().as_str(), "2PPPPPPP");
    }

    #[test]
    fn normalizes_hash_case_and_letter_o() {
        assert_eq!(Tag::parse("#ggjvjlu2").unwrap().as_str(), "GGJVJLU2");
        assert_eq!(Tag::parse("PYLO").unwrap().as_str(), "PYL0");
    }

    #[test]
    fn rejects_too_short() {
        let err = Tag::parse("P").unwrap_err();
        assert!(matches!(err, ApiError::InvalidTag { .. }));
        assert!(err.to_string().contains("shorter than 3"));
        assert!(Tag::parse("#").is_err());
    }

    #[test]
    fn rejects_invalid_characters() {
        let err = Tag::parse("AAA").unwrap_err();
        match err {
            ApiError::InvalidTag { tag, reason } => {
                assert_eq!(tag, "AAA");
                assert!(reason.contains("\"AAA\""));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn from_str_matches_parse() {
        let tag: Tag = "#qcgv8pg".parse().unwrap();
        assert_eq!(tag.to_string(), "QCGV8PG");
    }
}
