//! The persisted store document: one JSON file, written atomically.

use crate::domain::Note;
use crate::store::NoteStore;
use std::io::{self, Write as IoWrite};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Errors while writing the store document.
///
/// Reads have no error type: a load that fails for any reason yields an
/// empty store instead (the persistence layer fails open).
#[derive(Debug, Error)]
pub enum FileError {
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize store: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("atomic write failed for {path}: {source}")]
    AtomicWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Handle to the single persisted store document.
///
/// The document is a JSON array of note objects. It is read once per
/// command and fully rewritten after every mutation, mirroring the one
/// key-value slot of the original storage model.
#[derive(Debug, Clone)]
pub struct StoreFile {
    path: PathBuf,
}

impl StoreFile {
    /// Creates a handle for the document at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the store from disk.
    ///
    /// An absent file yields an empty store. A file that cannot be read
    /// or parsed also yields an empty store, with a warning on stderr;
    /// the malformed file is left in place untouched.
    pub fn load(&self) -> NoteStore {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return NoteStore::new(),
            Err(err) => {
                eprintln!(
                    "warning: cannot read store file {}: {err}; starting empty",
                    self.path.display()
                );
                return NoteStore::new();
            }
        };

        match serde_json::from_slice::<Vec<Note>>(&bytes) {
            Ok(notes) => NoteStore::from_notes(notes),
            Err(err) => {
                eprintln!(
                    "warning: ignoring malformed store file {}: {err}",
                    self.path.display()
                );
                NoteStore::new()
            }
        }
    }

    /// Serializes the full store and overwrites the document atomically.
    ///
    /// Writes to a temporary file in the same directory and renames it
    /// over the document, so readers never observe a partial write.
    /// Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns `FileError` if serialization, the temporary write, or the
    /// final rename fails. The previous document is intact on failure.
    pub fn save(&self, store: &NoteStore) -> Result<(), FileError> {
        let parent = self.parent_dir();
        std::fs::create_dir_all(parent).map_err(|e| FileError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;

        let json = serde_json::to_vec_pretty(store.notes())
            .map_err(|e| FileError::Serialize { source: e })?;

        let mut temp = NamedTempFile::new_in(parent).map_err(|e| FileError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        temp.write_all(&json).map_err(|e| FileError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        temp.persist(&self.path).map_err(|e| FileError::AtomicWrite {
            path: self.path.clone(),
            source: e.error,
        })?;

        Ok(())
    }

    /// Removes the persisted document, if present.
    ///
    /// # Errors
    ///
    /// Returns `FileError::Io` if an existing document cannot be removed.
    pub fn clear(&self) -> Result<(), FileError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(FileError::Io {
                path: self.path.clone(),
                source: err,
            }),
        }
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}
