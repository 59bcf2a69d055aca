//! # Creation Surface
//!
//! ```text
//! Closed ──open()──► Open(empty) ──typing──► Open(drafted)
//!   ▲                    │                        │
//!   └──── dismiss(): discard ◄────┘     dismiss(): commit draft
//! ```
//!
//! The surface only tracks the draft. Committing it is the reducer's job,
//! because a commit can fail and the draft must survive a failed write.

use crate::core::fields::{FieldEdit, TextFields};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CreationSurface {
    #[default]
    Closed,
    Open(TextFields),
}

/// What a click outside the open surface should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dismissal {
    /// Nothing was open.
    AlreadyClosed,
    /// The draft was empty and has been thrown away; the surface is closed.
    Discarded,
    /// The draft has content and should be created. The surface stays open
    /// until `close()` confirms the commit.
    Commit { title: String, text: String },
}

impl CreationSurface {
    pub fn is_open(&self) -> bool {
        matches!(self, CreationSurface::Open(_))
    }

    pub fn draft(&self) -> Option<&TextFields> {
        match self {
            CreationSurface::Open(fields) => Some(fields),
            CreationSurface::Closed => None,
        }
    }

    /// Opening an already open surface keeps the draft.
    pub fn open(&mut self) {
        if !self.is_open() {
            *self = CreationSurface::Open(TextFields::default());
        }
    }

    /// Edits while closed are ignored.
    pub fn edit(&mut self, edit: FieldEdit) {
        if let CreationSurface::Open(fields) = self {
            fields.apply(edit);
        }
    }

    /// Close and clear the draft.
    pub fn close(&mut self) {
        *self = CreationSurface::Closed;
    }

    pub fn dismiss(&mut self) -> Dismissal {
        match self {
            CreationSurface::Closed => Dismissal::AlreadyClosed,
            CreationSurface::Open(fields) if !fields.has_content() => {
                self.close();
                Dismissal::Discarded
            }
            CreationSurface::Open(fields) => Dismissal::Commit {
                title: fields.title.clone(),
                text: fields.text.clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drafted(title: &str, text: &str) -> CreationSurface {
        CreationSurface::Open(TextFields::new(title, text))
    }

    #[test]
    fn test_starts_closed() {
        let surface = CreationSurface::default();
        assert!(!surface.is_open());
        assert!(surface.draft().is_none());
    }

    #[test]
    fn test_open_is_empty_and_idempotent() {
        let mut surface = CreationSurface::default();
        surface.open();
        surface.edit(FieldEdit::Insert('a'));
        surface.open();
        assert_eq!(surface.draft().unwrap().title, "a");
    }

    #[test]
    fn test_edit_while_closed_is_ignored() {
        let mut surface = CreationSurface::default();
        surface.edit(FieldEdit::Insert('a'));
        assert_eq!(surface, CreationSurface::Closed);
    }

    #[test]
    fn test_dismiss_empty_discards() {
        let mut surface = drafted("  ", "");
        assert_eq!(surface.dismiss(), Dismissal::Discarded);
        assert!(!surface.is_open());
    }

    #[test]
    fn test_dismiss_drafted_asks_for_commit_and_keeps_draft() {
        let mut surface = drafted("Todo", "");
        assert_eq!(
            surface.dismiss(),
            Dismissal::Commit {
                title: "Todo".to_string(),
                text: String::new()
            }
        );
        assert!(surface.is_open());
    }

    #[test]
    fn test_dismiss_closed() {
        let mut surface = CreationSurface::Closed;
        assert_eq!(surface.dismiss(), Dismissal::AlreadyClosed);
    }
}
