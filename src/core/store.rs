//! # Note Store
//!
//! Owns the note collection and is the only thing that mutates it.
//!
//! ```text
//! create / update_text / update_color / delete
//!         │
//!         ▼
//!   build next Vec<Note>  ──►  storage.save(next)  ──►  self.notes = next
//!                                   │ Err
//!                                   ▼
//!                        StoreError::Persistence (self.notes untouched)
//! ```
//!
//! Every mutation writes the entire collection through the storage before it
//! becomes visible, so memory and disk never silently diverge.

use log::{debug, info, warn};

use crate::core::error::{Result, StoreError};
use crate::core::note::{self, Note, NoteId};
use crate::core::storage::NoteStorage;

pub struct NoteStore<S: NoteStorage> {
    notes: Vec<Note>,
    storage: S,
    /// Highest id seen this session (loaded or assigned). Ids are never reused.
    high_water: NoteId,
}

impl<S: NoteStorage> NoteStore<S> {
    /// Load the persisted collection from `storage`.
    pub fn open(storage: S) -> Result<Self> {
        let notes = storage.load()?;
        let high_water = notes.iter().map(|n| n.id).max().unwrap_or(0);
        info!(
            "Loaded {} notes from {} (highest id {})",
            notes.len(),
            storage.describe(),
            high_water
        );
        Ok(Self {
            notes,
            storage,
            high_water,
        })
    }

    /// Read-only view of the collection, in creation order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    /// Id the next `create` will assign.
    ///
    /// Appends continue from the last note's id; the session high-water mark
    /// keeps ids unique after the newest note has been deleted.
    pub fn next_id(&self) -> NoteId {
        let last = self.notes.last().map(|n| n.id).unwrap_or(0);
        last.max(self.high_water) + 1
    }

    /// Append a new white note. Returns `Ok(None)` when there is nothing to
    /// save (both fields blank); the collection is untouched in that case.
    pub fn create(&mut self, title: &str, text: &str) -> Result<Option<Note>> {
        if note::is_blank(title, text) {
            debug!("Ignoring create with blank title and text");
            return Ok(None);
        }
        let new_note = Note::new(self.next_id(), title, text);

        let mut next = self.notes.clone();
        next.push(new_note.clone());
        self.commit(next)?;

        self.high_water = self.high_water.max(new_note.id);
        info!("Created note {}", new_note.id);
        Ok(Some(new_note))
    }

    /// Replace title and text of note `id`, leaving its color alone.
    pub fn update_text(&mut self, id: NoteId, title: &str, text: &str) -> Result<Note> {
        let updated = self.modify(id, |n| {
            n.title = title.to_string();
            n.text = text.to_string();
        })?;
        info!("Updated text of note {}", id);
        Ok(updated)
    }

    /// Replace the color of note `id`.
    pub fn update_color(&mut self, id: NoteId, color: &str) -> Result<Note> {
        let updated = self.modify(id, |n| n.color = color.to_string())?;
        info!("Recolored note {} to {}", id, color);
        Ok(updated)
    }

    /// Remove note `id`. Returns whether a note was removed; nothing is
    /// written when the id is absent.
    pub fn delete(&mut self, id: NoteId) -> Result<bool> {
        if self.get(id).is_none() {
            debug!("Delete of absent note {} ignored", id);
            return Ok(false);
        }
        let next: Vec<Note> = self.notes.iter().filter(|n| n.id != id).cloned().collect();
        self.commit(next)?;
        info!("Deleted note {}", id);
        Ok(true)
    }

    /// Write the current collection again. Used on shutdown.
    pub fn persist(&mut self) -> Result<()> {
        self.storage.save(&self.notes)
    }

    fn modify(&mut self, id: NoteId, change: impl FnOnce(&mut Note)) -> Result<Note> {
        let index = self
            .notes
            .iter()
            .position(|n| n.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut next = self.notes.clone();
        change(&mut next[index]);
        let updated = next[index].clone();
        self.commit(next)?;
        Ok(updated)
    }

    /// Persist `next`, then make it the live collection.
    fn commit(&mut self, next: Vec<Note>) -> Result<()> {
        if let Err(e) = self.storage.save(&next) {
            warn!("Write to {} failed, keeping previous state: {}", self.storage.describe(), e);
            return Err(e);
        }
        self.notes = next;
        Ok(())
    }
}
