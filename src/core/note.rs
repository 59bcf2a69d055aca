//! # Notes
//!
//! The persisted entity. A note is just four fields; everything else
//! (selection, drafts, overlays) is transient and lives elsewhere.

use serde::{Deserialize, Serialize};

/// Note identifier. Positive, assigned sequentially by the store.
pub type NoteId = u64;

/// Color every new note starts with.
pub const DEFAULT_COLOR: &str = "white";

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    /// Named color token (see `palette`).
    #[serde(default = "default_color")]
    pub color: String,
}

impl Note {
    pub fn new(id: NoteId, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            text: text.into(),
            color: default_color(),
        }
    }
}

/// True when there is nothing worth saving: both fields empty after trimming.
pub fn is_blank(title: &str, text: &str) -> bool {
    title.trim().is_empty() && text.trim().is_empty()
}
