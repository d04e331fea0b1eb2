//! Isolated test environment with temp directory.

use super::JotCommand;
use jot::store::StoreFile;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary store file.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Provides methods for seeding notes and inspecting the store document.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the store file
    store_path: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with no store file yet.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let store_path = temp_dir.path().join("notes.json");
        Self {
            _temp_dir: temp_dir,
            store_path,
        }
    }

    /// Returns the path to the store file.
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Seeds a note through the library and returns its full id string.
    pub fn seed_note(&self, content: &str, tag_input: &str) -> String {
        let file = StoreFile::new(&self.store_path);
        let mut store = file.load();
        let id = store
            .create(content, tag_input)
            .expect("Failed to seed note")
            .id()
            .to_string();
        file.save(&store).expect("Failed to save seeded store");
        id
    }

    /// Overwrites the store document with raw bytes (for malformed-file tests).
    pub fn write_raw_store(&self, contents: &str) {
        std::fs::write(&self.store_path, contents).expect("Failed to write raw store");
    }

    /// Reads the raw store document.
    pub fn read_raw_store(&self) -> String {
        std::fs::read_to_string(&self.store_path).expect("Failed to read store file")
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new().store(&self.store_path)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
