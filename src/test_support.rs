//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::io;

use crate::core::error::{Result, StoreError};
use crate::core::note::Note;
use crate::core::state::App;
use crate::core::storage::{MemoryStorage, NoteStorage};
use crate::core::store::NoteStore;

/// Storage that loads fine but refuses every write.
#[derive(Debug, Default)]
pub struct FailingStorage {
    notes: Vec<Note>,
}

impl FailingStorage {
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self { notes }
    }
}

impl NoteStorage for FailingStorage {
    fn load(&self) -> Result<Vec<Note>> {
        Ok(self.notes.clone())
    }

    fn save(&mut self, _notes: &[Note]) -> Result<()> {
        Err(StoreError::Persistence(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "read-only slot",
        )))
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

/// Creates an empty test App backed by memory.
pub fn test_app() -> App {
    test_app_with(Vec::new())
}

/// Creates a test App whose storage already holds `notes`.
pub fn test_app_with(notes: Vec<Note>) -> App {
    let store = NoteStore::open(Box::new(MemoryStorage::with_notes(notes)) as Box<dyn NoteStorage>)
        .expect("memory storage always loads");
    App::new(store)
}

/// Creates a test App whose writes all fail.
pub fn failing_app(notes: Vec<Note>) -> App {
    let store = NoteStore::open(Box::new(FailingStorage::with_notes(notes)) as Box<dyn NoteStorage>)
        .expect("failing storage still loads");
    App::new(store)
}
