//! # Application State
//!
//! Core business state for Jotter. No terminal types here; presentation
//! state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: NoteStore             // the notes, written through on change
//! ├── selection: SelectionState    // Idle / Selected / Editing (overlay)
//! ├── creation: CreationSurface    // Closed / Open(draft)
//! ├── status_message: String       // status bar text
//! └── error: Option<String>        // last persistence failure
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::error::Result;
use crate::core::storage::NoteStorage;
use crate::core::store::NoteStore;
use crate::core::draft::CreationSurface;
use crate::core::selection::SelectionState;

pub type DynStorage = Box<dyn NoteStorage>;

pub struct App {
    pub store: NoteStore<DynStorage>,
    pub selection: SelectionState,
    pub creation: CreationSurface,
    pub status_message: String,
    /// Set when a write failed; cleared by the next successful mutation.
    pub error: Option<String>,
}

impl App {
    pub fn new(store: NoteStore<DynStorage>) -> Self {
        Self {
            store,
            selection: SelectionState::Idle,
            creation: CreationSurface::Closed,
            status_message: String::from("Welcome to Jotter!"),
            error: None,
        }
    }

    /// Load the collection from `storage` and start idle.
    pub fn open(storage: DynStorage) -> Result<Self> {
        Ok(Self::new(NoteStore::open(storage)?))
    }
}
