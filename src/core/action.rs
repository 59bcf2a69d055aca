//! # Actions
//!
//! Everything a user can mean becomes an `Action`. The adapter decides
//! *which* intent a keypress or click carries; this module decides what the
//! intent does. Clicked the delete icon? That's `Action::Delete(id)`.
//! Clicked outside the open form? That's `Action::Dismiss`.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect for the adapter)
//! ```
//!
//! `update()` is the only caller of the `NoteStore`, and it never lets a
//! store error escape: not-found and failed writes become status text.

use log::{debug, warn};

use crate::core::draft::Dismissal;
use crate::core::error::StoreError;
use crate::core::fields::FieldEdit;
use crate::core::note::NoteId;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Focus the creation form.
    OpenCreation,
    EditDraft(FieldEdit),
    /// Explicit submit of the draft.
    SubmitDraft,
    /// Close the creation form, throwing the draft away.
    DiscardDraft,
    /// Input landed outside whatever is open.
    Dismiss,
    /// Target a note for recoloring.
    Select(NoteId),
    /// Select a note and open the edit overlay on it.
    Edit(NoteId),
    EditOverlay(FieldEdit),
    /// Close the overlay, saving what it holds.
    CloseOverlay,
    /// Recolor the selected note.
    Recolor(String),
    Delete(NoteId),
    Quit,
}

/// What the adapter should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Render,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::OpenCreation => {
            app.creation.open();
            Effect::Render
        }
        Action::EditDraft(edit) => {
            app.creation.edit(edit);
            Effect::Render
        }
        Action::SubmitDraft => submit_draft(app),
        Action::DiscardDraft => {
            if !app.creation.is_open() {
                return Effect::None;
            }
            app.creation.close();
            app.status_message = "Draft discarded".to_string();
            Effect::Render
        }
        Action::Dismiss => dismiss(app),
        Action::Select(id) => {
            select(app, id);
            Effect::Render
        }
        Action::Edit(id) => {
            if select(app, id) {
                app.selection.open_overlay();
            }
            Effect::Render
        }
        Action::EditOverlay(edit) => {
            app.selection.edit_overlay(edit);
            Effect::Render
        }
        Action::CloseOverlay => {
            close_overlay(app);
            Effect::Render
        }
        Action::Recolor(color) => {
            recolor(app, &color);
            Effect::Render
        }
        Action::Delete(id) => {
            delete(app, id);
            Effect::Render
        }
        Action::Quit => Effect::Quit,
    }
}

fn submit_draft(app: &mut App) -> Effect {
    let Some(draft) = app.creation.draft().cloned() else {
        return Effect::None;
    };
    match app.store.create(&draft.title, &draft.text) {
        Ok(Some(note)) => {
            app.creation.close();
            saved(app, format!("Added note {}", note.id));
        }
        Ok(None) => app.status_message = "Nothing to save".to_string(),
        Err(e) => report(app, e),
    }
    Effect::Render
}

fn dismiss(app: &mut App) -> Effect {
    if app.selection.is_overlay_open() {
        close_overlay(app);
        return Effect::Render;
    }
    match app.creation.dismiss() {
        Dismissal::AlreadyClosed => app.selection.clear(),
        Dismissal::Discarded => {}
        Dismissal::Commit { title, text } => match app.store.create(&title, &text) {
            Ok(created) => {
                app.creation.close();
                if let Some(note) = created {
                    saved(app, format!("Added note {}", note.id));
                }
            }
            // Draft stays open so nothing typed is lost
            Err(e) => report(app, e),
        },
    }
    Effect::Render
}

/// Cache the note's current fields as the selection. False if it is gone.
fn select(app: &mut App, id: NoteId) -> bool {
    match app.store.get(id).cloned() {
        Some(note) => app.selection.select(&note),
        None => {
            report(app, StoreError::NotFound(id));
            false
        }
    }
}

fn close_overlay(app: &mut App) {
    let Some(pending) = app.selection.close_overlay() else {
        return;
    };
    match app.store.update_text(pending.id, &pending.title, &pending.text) {
        Ok(note) => saved(app, format!("Saved note {}", note.id)),
        Err(e) => report(app, e),
    }
}

fn recolor(app: &mut App, color: &str) {
    let Some(id) = app.selection.selected_id() else {
        app.status_message = "Select a note to recolor".to_string();
        return;
    };
    match app.store.update_color(id, color) {
        Ok(note) => saved(app, format!("Note {} is now {}", note.id, note.color)),
        Err(e) => report(app, e),
    }
}

fn delete(app: &mut App, id: NoteId) {
    match app.store.delete(id) {
        Ok(true) => saved(app, format!("Deleted note {}", id)),
        Ok(false) => app.status_message = format!("Note {} no longer exists", id),
        Err(e) => report(app, e),
    }
}

fn saved(app: &mut App, status: String) {
    app.error = None;
    app.status_message = status;
}

fn report(app: &mut App, error: StoreError) {
    warn!("{}", error);
    match error {
        StoreError::NotFound(id) => {
            if app.selection.selected_id() == Some(id) {
                app.selection.clear();
            }
            app.status_message = format!("Note {} no longer exists", id);
        }
        other => {
            app.status_message = "Changes not saved".to_string();
            app.error = Some(other.to_string());
        }
    }
}
