//! # Selection and Edit Overlay
//!
//! ```text
//!            select(note)              open_overlay()
//!   Idle ───────────────► Selected ───────────────► Editing
//!    ▲                      │  ▲ select(other)         │
//!    │        clear()       │  └──────┘                │
//!    ├──────────────────────┘                          │
//!    └──────────────── close_overlay() ────────────────┘
//!                      (yields the edit to commit)
//! ```
//!
//! The selection is what a recolor applies to, so it lives independently of
//! whether the overlay is showing.

use crate::core::fields::{FieldEdit, TextFields};
use crate::core::note::{Note, NoteId};

/// The targeted note, with the fields it had when it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: NoteId,
    pub title: String,
    pub text: String,
}

impl From<&Note> for Selection {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            text: note.text.clone(),
        }
    }
}

/// Overlay contents to write back with `update_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingEdit {
    pub id: NoteId,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    Selected(Selection),
    Editing {
        selection: Selection,
        fields: TextFields,
    },
}

impl SelectionState {
    pub fn selected_id(&self) -> Option<NoteId> {
        self.selection().map(|s| s.id)
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            SelectionState::Idle => None,
            SelectionState::Selected(selection) | SelectionState::Editing { selection, .. } => {
                Some(selection)
            }
        }
    }

    pub fn is_overlay_open(&self) -> bool {
        matches!(self, SelectionState::Editing { .. })
    }

    pub fn overlay_fields(&self) -> Option<&TextFields> {
        match self {
            SelectionState::Editing { fields, .. } => Some(fields),
            _ => None,
        }
    }

    /// Cache `note` as the target. Ignored while the overlay is open, so an
    /// in-progress edit can never be retargeted. Returns whether it applied.
    pub fn select(&mut self, note: &Note) -> bool {
        if self.is_overlay_open() {
            return false;
        }
        *self = SelectionState::Selected(Selection::from(note));
        true
    }

    /// Open the overlay pre-filled from the cached selection.
    pub fn open_overlay(&mut self) -> bool {
        match self {
            SelectionState::Selected(selection) => {
                let selection = selection.clone();
                let fields = TextFields::new(selection.title.clone(), selection.text.clone());
                *self = SelectionState::Editing { selection, fields };
                true
            }
            _ => false,
        }
    }

    pub fn edit_overlay(&mut self, edit: FieldEdit) {
        if let SelectionState::Editing { fields, .. } = self {
            fields.apply(edit);
        }
    }

    /// Close the overlay and return to `Idle`, handing back what to commit.
    pub fn close_overlay(&mut self) -> Option<PendingEdit> {
        match std::mem::take(self) {
            SelectionState::Editing { selection, fields } => Some(PendingEdit {
                id: selection.id,
                title: fields.title,
                text: fields.text,
            }),
            other => {
                *self = other;
                None
            }
        }
    }

    pub fn clear(&mut self) {
        *self = SelectionState::Idle;
    }
}
