//! # Note Persistence
//!
//! The whole collection lives in a single named slot and is rewritten
//! wholesale after every mutation. There is no append log and no partial
//! update: a slot either holds the previous collection or the next one.
//!
//! `JsonFileStorage` writes `~/.jotter/notes.json` using atomic rename
//! (write `.tmp`, then `rename()`) for crash safety.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Serialize;

use crate::core::error::{Result, StoreError};
use crate::core::note::Note;

/// Name of the slot inside the data directory.
pub const NOTES_FILE: &str = "notes.json";

/// Somewhere the note collection can be read from and written to.
pub trait NoteStorage {
    /// Read the persisted collection. An absent slot is an empty collection.
    fn load(&self) -> Result<Vec<Note>>;

    /// Replace the persisted collection with `notes`.
    fn save(&mut self, notes: &[Note]) -> Result<()>;

    /// Human-readable location, for logs and the status bar.
    fn describe(&self) -> String;
}

impl<S: NoteStorage + ?Sized> NoteStorage for Box<S> {
    fn load(&self) -> Result<Vec<Note>> {
        (**self).load()
    }

    fn save(&mut self, notes: &[Note]) -> Result<()> {
        (**self).save(notes)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Returns `~/.jotter/`, the default home of notes, config and logs.
pub fn data_dir() -> io::Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
    Ok(home.join(".jotter"))
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// The collection as a pretty-printed JSON array in one file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl NoteStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Note>> {
        if !self.path.exists() {
            debug!("No notes file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path).map_err(StoreError::Load)?;
        if json.trim().is_empty() {
            return Ok(Vec::new());
        }
        // `null` is what an emptied browser slot used to hold; treat it as empty too
        let notes: Option<Vec<Note>> = serde_json::from_str(&json)
            .map_err(|e| StoreError::Load(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        Ok(notes.unwrap_or_default())
    }

    fn save(&mut self, notes: &[Note]) -> Result<()> {
        atomic_write_json(&self.path, notes).map_err(StoreError::Persistence)?;
        debug!("Wrote {} notes to {}", notes.len(), self.path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// In-process slot. Useful for tests and for embedding without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    /// Last written collection (`None` = never written).
    pub saved: Option<Vec<Note>>,
    /// Number of successful writes.
    pub writes: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds `notes`, as if left by a previous run.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            saved: Some(notes),
            writes: 0,
        }
    }
}

impl NoteStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Note>> {
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, notes: &[Note]) -> Result<()> {
        self.saved = Some(notes.to_vec());
        self.writes += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
