//! Note struct: full content, derived summary, and user tags.

use crate::domain::{NoteId, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of leading words shown in a note's summary.
const SUMMARY_WORDS: usize = 5;

/// Derives the display summary for a content string.
///
/// The summary is the first five whitespace-separated tokens joined with
/// single spaces, suffixed with `"..."` when the content has more than
/// five tokens. Content of five or fewer tokens is returned verbatim,
/// original spacing included.
///
/// # Examples
///
/// ```
/// use jot::domain::summarize;
///
/// assert_eq!(summarize("Buy milk"), "Buy milk");
/// assert_eq!(
///     summarize("Buy milk and eggs today please"),
///     "Buy milk and eggs today...",
/// );
/// ```
pub fn summarize(content: &str) -> String {
    let tokens: Vec<&str> = content.split_whitespace().collect();
    if tokens.len() > SUMMARY_WORDS {
        format!("{}...", tokens[..SUMMARY_WORDS].join(" "))
    } else {
        content.to_string()
    }
}

/// The kind of error that occurred when constructing a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseNoteErrorKind {
    EmptyContent,
}

/// Error returned when constructing an invalid note.
#[derive(Debug, Clone)]
pub struct ParseNoteError {
    kind: ParseNoteErrorKind,
}

impl fmt::Display for ParseNoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseNoteErrorKind::EmptyContent => {
                write!(f, "invalid note: content cannot be empty")
            }
        }
    }
}

impl std::error::Error for ParseNoteError {}

/// A saved text entry.
///
/// The content is stored verbatim as entered; the summary is always
/// derived from it and never independently mutated. Tags reflect exactly
/// the last tag-input field parsed for this note.
#[derive(Clone, PartialEq)]
pub struct Note {
    id: NoteId,
    content: String,
    summary: String,
    tags: Vec<Tag>,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl Note {
    /// Creates a new Note, deriving the summary from `content`.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the content is empty or whitespace-only.
    pub fn new(
        id: NoteId,
        content: impl Into<String>,
        tags: Vec<Tag>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> Result<Self, ParseNoteError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(ParseNoteError {
                kind: ParseNoteErrorKind::EmptyContent,
            });
        }

        let summary = summarize(&content);
        Ok(Self {
            id,
            content,
            summary,
            tags,
            created,
            modified,
        })
    }

    /// Returns a copy of this note with new content and tags.
    ///
    /// The id and creation timestamp are kept; the summary is re-derived
    /// and `modified` is updated.
    ///
    /// # Errors
    ///
    /// Returns `ParseNoteError` if the new content is empty or
    /// whitespace-only.
    pub fn revised(
        &self,
        content: impl Into<String>,
        tags: Vec<Tag>,
        modified: DateTime<Utc>,
    ) -> Result<Self, ParseNoteError> {
        Note::new(self.id.clone(), content, tags, self.created, modified)
    }

    /// Returns the note's stable identifier.
    pub fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the full content as entered.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the derived summary.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Returns the note's tags in entry order.
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Returns when the note was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the note was last modified.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.summary, self.id.prefix())
    }
}

impl fmt::Debug for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Note")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("summary", &self.summary)
            .field("tags", &self.tags)
            .field("created", &self.created)
            .field("modified", &self.modified)
            .finish()
    }
}

impl Serialize for Note {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("id", &self.id)?;
        map.serialize_entry("content", &self.content)?;
        map.serialize_entry("summary", &self.summary)?;
        map.serialize_entry("tags", &self.tags)?;
        map.serialize_entry("created", &self.created)?;
        map.serialize_entry("modified", &self.modified)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Note {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // The stored summary is accepted but ignored: summaries are always
        // re-derived from content, so a hand-edited file cannot desync them.
        #[derive(Deserialize)]
        struct NoteHelper {
            id: NoteId,
            content: String,
            #[serde(default)]
            #[allow(dead_code)]
            summary: String,
            #[serde(default)]
            tags: Vec<Tag>,
            created: DateTime<Utc>,
            modified: DateTime<Utc>,
        }

        let helper = NoteHelper::deserialize(deserializer)?;
        Note::new(
            helper.id,
            helper.content,
            helper.tags,
            helper.created,
            helper.modified,
        )
        .map_err(serde::de::Error::custom)
    }
}
