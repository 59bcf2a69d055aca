use thiserror::Error;

use crate::core::note::NoteId;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Note not found: {0}")]
    NotFound(NoteId),

    #[error("Failed to save notes: {0}")]
    Persistence(#[source] std::io::Error),

    #[error("Failed to load notes: {0}")]
    Load(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
