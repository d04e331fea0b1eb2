//! ULID-based note identifier with prefix display and serde support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::time::SystemTime;
use ulid::Ulid;

/// A stable, unique identifier for notes based on ULID.
///
/// Every note is assigned a `NoteId` at creation and keeps it for life.
/// All store operations address notes by id, so an identity captured
/// before other notes are inserted or deleted remains valid.
///
/// ULIDs are 26-character Crockford Base32 strings, lexicographically
/// sortable by creation time and URL-safe. Listings show an 8-character
/// prefix; any unambiguous prefix is accepted on the command line.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteId(Ulid);

impl NoteId {
    /// Creates a new NoteId with the current timestamp.
    pub fn new() -> Self {
        Self(Ulid::new())
    }

    /// Creates a NoteId from a specific datetime (useful for testing).
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        let system_time: SystemTime = datetime.into();
        Self(Ulid::from_datetime(system_time))
    }

    /// Returns the 8-character display prefix of the ULID.
    pub fn prefix(&self) -> String {
        self.0.to_string()[..8].to_string()
    }

    /// Returns true if this id's canonical string starts with `prefix`.
    ///
    /// Matching is case-insensitive, as Crockford Base32 decoding is.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        self.0.to_string().starts_with(&prefix.to_ascii_uppercase())
    }

    /// Returns the timestamp embedded in this id.
    pub fn timestamp(&self) -> DateTime<Utc> {
        let millis = self.0.timestamp_ms();
        DateTime::from_timestamp_millis(millis as i64).expect("ULID timestamp should be valid")
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid ULID string.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: String,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s)
            .map(NoteId)
            .map_err(|e| ParseNoteIdError {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn new_creates_valid_ulid() {
        let id = NoteId::new();
        assert_eq!(id.to_string().len(), 26);
    }

    #[test]
    fn new_ids_are_unique() {
        let ids: HashSet<String> = (0..100).map(|_| NoteId::new().to_string()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn prefix_is_eight_chars() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert_eq!(id.prefix(), "01HQ3K5M");
    }

    #[test]
    fn matches_prefix_is_case_insensitive() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert!(id.matches_prefix("01hq3k"));
        assert!(id.matches_prefix("01HQ3K5M7NXJK4QZPW8V2R6T9Y"));
        assert!(!id.matches_prefix("01ZZ"));
    }

    #[test]
    fn parse_roundtrip() {
        let id = NoteId::new();
        let parsed: NoteId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("not-a-ulid".parse::<NoteId>().is_err());
        assert!("".parse::<NoteId>().is_err());
    }

    #[test]
    fn parse_error_includes_value() {
        let err = "bogus!".parse::<NoteId>().unwrap_err();
        assert_eq!(err.invalid_value(), "bogus!");
        assert!(err.to_string().contains("bogus!"));
    }

    #[test]
    fn timestamp_matches_creation_datetime() {
        let when = DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let id = NoteId::from_datetime(when);
        assert_eq!(id.timestamp(), when);
    }

    #[test]
    fn display_is_full_ulid() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert_eq!(format!("{}", id), "01HQ3K5M7NXJK4QZPW8V2R6T9Y");
    }

    #[test]
    fn debug_format() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert_eq!(format!("{:?}", id), "NoteId(\"01HQ3K5M7NXJK4QZPW8V2R6T9Y\")");
    }

    #[test]
    fn serde_roundtrip_as_string() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"01HQ3K5M7NXJK4QZPW8V2R6T9Y\"");
        let parsed: NoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn serde_rejects_invalid() {
        let result: Result<NoteId, _> = serde_json::from_str("\"nope\"");
        assert!(result.is_err());
    }
}
