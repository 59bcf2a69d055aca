//! # Input Interpretation
//!
//! Turns raw terminal input into an `Intent`, given what is currently on
//! screen. Most intents are plain core `Action`s; the rest only move
//! presentation state (grid cursor, scroll, the color picker).
//!
//! ```text
//! TuiEvent ──► Focus::of(app, tui) ──► key_intent / click_intent ──► Intent
//!                                           ▲
//!                          hit_test(tui, col, row) for clicks
//! ```

use ratatui::layout::Position;

use crate::core::action::Action;
use crate::core::fields::FieldEdit;
use crate::core::note::NoteId;
use crate::core::palette::PALETTE;
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::components::{CardTarget, ColorPickerState, GridMove};
use crate::tui::event::TuiEvent;

/// Which surface receives input. Topmost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Picker,
    Overlay,
    Form,
    Grid,
}

impl Focus {
    pub fn of(app: &App, tui: &TuiState) -> Self {
        if tui.picker.is_some() {
            Focus::Picker
        } else if app.selection.is_overlay_open() {
            Focus::Overlay
        } else if app.creation.is_open() {
            Focus::Form
        } else {
            Focus::Grid
        }
    }
}

/// What lies under a mouse click, checked from the top layer down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Swatch(usize),
    Picker,
    Overlay,
    FormClose,
    Form,
    DeleteButton(NoteId),
    ColorButton(NoteId),
    Card(NoteId),
    Outside,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Action(Action),
    /// Select the note and open the color picker for it.
    RecolorNote(NoteId),
    PickColor(&'static str),
    ClosePicker,
    MoveCursor(GridMove),
    ScrollUp,
    ScrollDown,
    Ignore,
}

pub fn hit_test(tui: &TuiState, col: u16, row: u16) -> ClickTarget {
    let pos = Position::new(col, row);
    if tui.picker.is_some() {
        if let Some(index) = ColorPickerState::swatch_at(tui.screen, col, row) {
            return ClickTarget::Swatch(index);
        }
        if ColorPickerState::area(tui.screen).contains(pos) {
            return ClickTarget::Picker;
        }
    }
    if let Some(overlay) = tui.overlay_area
        && overlay.contains(pos)
    {
        return ClickTarget::Overlay;
    }
    if let Some(close) = tui.form_close
        && close.contains(pos)
    {
        return ClickTarget::FormClose;
    }
    if tui.form_area.contains(pos) {
        return ClickTarget::Form;
    }
    match tui.grid.hit(col, row) {
        Some(CardTarget::Delete(id)) => ClickTarget::DeleteButton(id),
        Some(CardTarget::Color(id)) => ClickTarget::ColorButton(id),
        Some(CardTarget::Body(id)) => ClickTarget::Card(id),
        None => ClickTarget::Outside,
    }
}

pub fn click_intent(focus: Focus, target: ClickTarget) -> Intent {
    match (focus, target) {
        (Focus::Picker, ClickTarget::Swatch(index)) => Intent::PickColor(PALETTE[index]),
        (Focus::Picker, ClickTarget::Picker) => Intent::Ignore,
        (Focus::Picker, _) => Intent::ClosePicker,

        (Focus::Overlay, ClickTarget::Overlay) => Intent::Ignore,
        (Focus::Form, ClickTarget::Form) => Intent::Ignore,
        (Focus::Form, ClickTarget::FormClose) => Intent::Action(Action::DiscardDraft),
        // Anything else closes what is open, and does nothing more
        (Focus::Overlay | Focus::Form, _) => Intent::Action(Action::Dismiss),

        (Focus::Grid, ClickTarget::Form) => Intent::Action(Action::OpenCreation),
        (Focus::Grid, ClickTarget::DeleteButton(id)) => Intent::Action(Action::Delete(id)),
        (Focus::Grid, ClickTarget::ColorButton(id)) => Intent::RecolorNote(id),
        (Focus::Grid, ClickTarget::Card(id)) => Intent::Action(Action::Edit(id)),
        (Focus::Grid, ClickTarget::Outside) => Intent::Action(Action::Dismiss),
        (Focus::Grid, _) => Intent::Ignore,
    }
}

/// Keys for the grid, the form and the overlay. The picker handles its
/// own keys.
pub fn key_intent(focus: Focus, event: &TuiEvent, cursor: Option<NoteId>) -> Intent {
    if matches!(event, TuiEvent::ForceQuit) {
        return Intent::Action(Action::Quit);
    }
    match focus {
        Focus::Form => match field_edit(event) {
            Some(edit) => Intent::Action(Action::EditDraft(edit)),
            None => match event {
                TuiEvent::Save => Intent::Action(Action::SubmitDraft),
                TuiEvent::Discard => Intent::Action(Action::DiscardDraft),
                TuiEvent::Escape => Intent::Action(Action::Dismiss),
                _ => Intent::Ignore,
            },
        },
        Focus::Overlay => match field_edit(event) {
            Some(edit) => Intent::Action(Action::EditOverlay(edit)),
            None => match event {
                TuiEvent::Save | TuiEvent::Escape => Intent::Action(Action::CloseOverlay),
                _ => Intent::Ignore,
            },
        },
        Focus::Grid => grid_key(event, cursor),
        Focus::Picker => Intent::Ignore,
    }
}

fn field_edit(event: &TuiEvent) -> Option<FieldEdit> {
    match event {
        TuiEvent::InputChar(c) => Some(FieldEdit::Insert(*c)),
        TuiEvent::Enter => Some(FieldEdit::Insert('\n')),
        TuiEvent::Paste(s) => Some(FieldEdit::Paste(s.clone())),
        TuiEvent::Backspace => Some(FieldEdit::Backspace),
        TuiEvent::Tab => Some(FieldEdit::NextField),
        _ => None,
    }
}

fn grid_key(event: &TuiEvent, cursor: Option<NoteId>) -> Intent {
    let on_cursor = |make: fn(NoteId) -> Intent| cursor.map(make).unwrap_or(Intent::Ignore);
    match event {
        TuiEvent::CursorUp => Intent::MoveCursor(GridMove::Up),
        TuiEvent::CursorDown => Intent::MoveCursor(GridMove::Down),
        TuiEvent::CursorLeft => Intent::MoveCursor(GridMove::Left),
        TuiEvent::CursorRight => Intent::MoveCursor(GridMove::Right),
        TuiEvent::ScrollUp => Intent::ScrollUp,
        TuiEvent::ScrollDown => Intent::ScrollDown,
        TuiEvent::Escape => Intent::Action(Action::Dismiss),
        TuiEvent::InputChar('n') => Intent::Action(Action::OpenCreation),
        TuiEvent::InputChar('q') => Intent::Action(Action::Quit),
        TuiEvent::Enter => on_cursor(|id| Intent::Action(Action::Edit(id))),
        TuiEvent::InputChar('c') => on_cursor(Intent::RecolorNote),
        TuiEvent::InputChar('d') | TuiEvent::Delete => on_cursor(|id| Intent::Action(Action::Delete(id))),
        _ => Intent::Ignore,
    }
}
