//! The note store: ordered note list, persistence, and derived queries.

mod file;
mod query;

pub use file::{FileError, StoreFile};
pub use query::{ALL_CATEGORY, categories, filter};

use crate::domain::{Note, NoteId, parse_tag_input};
use chrono::Utc;
use thiserror::Error;

/// Errors from store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("note content cannot be empty")]
    EmptyContent,

    #[error("no note with id '{id}'")]
    NotFound { id: String },
}

/// Result of resolving a user-supplied id or id prefix.
#[derive(Debug)]
pub enum Resolve<'a> {
    /// Exactly one note matched.
    Unique(&'a Note),
    /// Multiple notes matched (ambiguous prefix).
    Ambiguous(Vec<&'a Note>),
    /// No notes matched.
    NotFound,
}

/// The ordered collection of notes.
///
/// Insertion order is the canonical order: new notes are appended at the
/// end. Mutations operate on in-memory state only; callers persist the
/// resulting store through [`StoreFile`], keeping state transitions
/// decoupled from I/O. All mutations address notes by stable id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteStore {
    notes: Vec<Note>,
}

impl NoteStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from an already-loaded note list.
    pub fn from_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }

    /// Returns all notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the number of notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns true if the store holds no notes.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Returns the note with the given id, if any.
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id() == id)
    }

    /// Creates a note from raw content and a comma-separated tag field,
    /// appending it to the store.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyContent` if the content is empty or
    /// whitespace-only; the store is unchanged.
    pub fn create(&mut self, content: &str, tag_input: &str) -> Result<&Note, StoreError> {
        let now = Utc::now();
        let note = Note::new(NoteId::new(), content, parse_tag_input(tag_input), now, now)
            .map_err(|_| StoreError::EmptyContent)?;
        self.notes.push(note);
        Ok(self.notes.last().expect("note was just pushed"))
    }

    /// Replaces the identified note with a freshly derived one built from
    /// the new content and tag field. The id and creation timestamp are
    /// kept; summary and modification time are re-derived.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id and
    /// `StoreError::EmptyContent` for blank content; the store is
    /// unchanged in both cases.
    pub fn update(
        &mut self,
        id: &NoteId,
        content: &str,
        tag_input: &str,
    ) -> Result<&Note, StoreError> {
        let position = self
            .notes
            .iter()
            .position(|n| n.id() == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;

        let revised = self.notes[position]
            .revised(content, parse_tag_input(tag_input), Utc::now())
            .map_err(|_| StoreError::EmptyContent)?;

        self.notes[position] = revised;
        Ok(&self.notes[position])
    }

    /// Removes and returns the identified note.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id; the store is
    /// unchanged.
    pub fn delete(&mut self, id: &NoteId) -> Result<Note, StoreError> {
        let position = self
            .notes
            .iter()
            .position(|n| n.id() == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        Ok(self.notes.remove(position))
    }

    /// Removes every note.
    pub fn clear(&mut self) {
        self.notes.clear();
    }

    /// Resolves a user-supplied identifier (full id or prefix) to a note.
    pub fn resolve(&self, identifier: &str) -> Resolve<'_> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Resolve::NotFound;
        }

        let matches: Vec<&Note> = self
            .notes
            .iter()
            .filter(|n| n.id().matches_prefix(identifier))
            .collect();

        match matches.len() {
            0 => Resolve::NotFound,
            1 => Resolve::Unique(matches[0]),
            _ => Resolve::Ambiguous(matches),
        }
    }
}
