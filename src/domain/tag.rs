//! Tag value type and comma-separated tag-input parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user tag attached to a note.
///
/// Tags are free-form labels entered as a comma-separated field. Each tag
/// is trimmed of surrounding whitespace; case is preserved, so `Home` and
/// `home` are distinct tags. A note's tag list keeps entry order and may
/// contain duplicates; the list reflects exactly what the user typed.
///
/// # Examples
///
/// ```
/// use jot::domain::Tag;
///
/// let tag = Tag::new("  Home ").unwrap();
/// assert_eq!(tag.as_str(), "Home");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tag(String);

/// Error returned when constructing an empty tag.
#[derive(Debug, Clone)]
pub struct ParseTagError;

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tag cannot be empty")
    }
}

impl std::error::Error for ParseTagError {}

impl Tag {
    /// Creates a new Tag, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the tag is empty or whitespace-only.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseTagError);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the tag value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Parses a comma-separated tag-input field into tags.
///
/// Each entry is trimmed; entries that are empty after trimming are
/// dropped. Order is preserved and duplicates are retained.
///
/// # Examples
///
/// ```
/// use jot::domain::parse_tag_input;
///
/// let tags = parse_tag_input(" work, , Home ,work");
/// let strs: Vec<_> = tags.iter().map(|t| t.as_str()).collect();
/// assert_eq!(strs, ["work", "Home", "work"]);
/// ```
pub fn parse_tag_input(input: &str) -> Vec<Tag> {
    input
        .split(',')
        .filter_map(|entry| Tag::new(entry).ok())
        .collect()
}
