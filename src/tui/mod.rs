//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after events or a terminal resize. All pending events are
//! drained before the next draw.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
mod intent;
mod theme;
mod ui;

use std::io::{self, stdout};
use std::time::Duration;

use log::{debug, info, warn};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::note::NoteId;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{CardSize, ColorPickerState, NoteGridState, PickerEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::intent::{Focus, Intent, click_intent, hit_test, key_intent};

/// Lines moved per wheel notch / PageUp / PageDown.
const SCROLL_STEP: u16 = 3;

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub grid: NoteGridState,
    pub card: CardSize,
    /// Color picker overlay (None = hidden)
    pub picker: Option<ColorPickerState>,
    // Areas from the last draw, for hit testing
    pub screen: Rect,
    pub form_area: Rect,
    /// Discard button, present while the form is open
    pub form_close: Option<Rect>,
    pub overlay_area: Option<Rect>,
}

impl TuiState {
    pub fn new(card: CardSize) -> Self {
        Self {
            grid: NoteGridState::new(),
            card,
            picker: None,
            screen: Rect::default(),
            form_area: Rect::default(),
            form_close: None,
            overlay_area: None,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // The kitty protocol lets a bare Esc arrive without delay; terminals
        // that don't support it ignore the request
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

pub fn run(config: &ResolvedConfig, mut app: App) -> io::Result<()> {
    let mut tui = TuiState::new(CardSize {
        width: config.card_width,
        text_lines: config.card_text_lines,
    });

    let mut terminal = ratatui::init();
    let guard = match TerminalModeGuard::new() {
        Ok(guard) => Some(guard),
        Err(e) => {
            warn!("Could not enable terminal modes: {}", e);
            None
        }
    };

    let result = event_loop(&mut terminal, &mut app, &mut tui);

    drop(guard);
    ratatui::restore();
    shutdown(&mut app);
    result
}

fn event_loop(terminal: &mut ratatui::DefaultTerminal, app: &mut App, tui: &mut TuiState) -> io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(Duration::from_millis(500));
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(app, tui, event) {
                return Ok(());
            }
        }
    }
}

/// Route one event. Returns true when the app should exit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    let focus = Focus::of(app, tui);
    let intent = match &event {
        // Resize just needs a redraw
        TuiEvent::Resize => return false,
        TuiEvent::ForceQuit => Intent::Action(Action::Quit),
        TuiEvent::MouseClick(col, row) => click_intent(focus, hit_test(tui, *col, *row)),
        TuiEvent::ScrollUp => Intent::ScrollUp,
        TuiEvent::ScrollDown => Intent::ScrollDown,
        _ => match tui.picker.as_mut() {
            Some(picker) => match picker.handle_event(&event) {
                Some(PickerEvent::Pick(color)) => Intent::PickColor(color),
                Some(PickerEvent::Dismiss) => Intent::ClosePicker,
                None => Intent::Ignore,
            },
            None => key_intent(focus, &event, tui.grid.cursor_id(app.store.list())),
        },
    };
    debug!("{:?} -> {:?}", event, intent);

    let before = app.store.len();
    let quit = apply(app, tui, intent);
    if app.store.len() > before {
        // Bring a newly added note into view
        tui.grid.focus(app.store.len() - 1);
    }
    tui.grid.clamp(app.store.len());
    quit
}

fn apply(app: &mut App, tui: &mut TuiState, intent: Intent) -> bool {
    match intent {
        Intent::Action(action) => {
            if let Action::Edit(id) | Action::Select(id) = action {
                point_cursor_at(app, tui, id);
            }
            update(app, action) == Effect::Quit
        }
        Intent::RecolorNote(id) => {
            point_cursor_at(app, tui, id);
            update(app, Action::Select(id));
            if app.selection.selected_id() == Some(id)
                && let Some(note) = app.store.get(id)
            {
                tui.picker = Some(ColorPickerState::new(&note.color));
            }
            false
        }
        Intent::PickColor(color) => {
            tui.picker = None;
            update(app, Action::Recolor(color.to_string()));
            false
        }
        Intent::ClosePicker => {
            tui.picker = None;
            false
        }
        Intent::MoveCursor(direction) => {
            tui.grid.move_cursor(direction, app.store.len());
            false
        }
        Intent::ScrollUp => {
            tui.grid.scroll_up(SCROLL_STEP);
            false
        }
        Intent::ScrollDown => {
            tui.grid.scroll_down(SCROLL_STEP);
            false
        }
        Intent::Ignore => false,
    }
}

fn point_cursor_at(app: &App, tui: &mut TuiState, id: NoteId) {
    if let Some(index) = app.store.list().iter().position(|n| n.id == id) {
        tui.grid.cursor = index;
    }
}

/// Commit whatever is still open, then write the collection one last time.
fn shutdown(app: &mut App) {
    if app.selection.is_overlay_open() || app.creation.is_open() {
        update(app, Action::Dismiss);
    }
    match app.store.persist() {
        Ok(()) => info!("Saved {} notes on exit", app.store.len()),
        Err(e) => warn!("Final save failed: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::note::Note;
    use crate::test_support::{test_app, test_app_with};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Position;

    fn tui() -> TuiState {
        TuiState::new(CardSize {
            width: 24,
            text_lines: 2,
        })
    }

    /// Draw once so hit areas are known, as the event loop does.
    fn draw(app: &App, tui: &mut TuiState) {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui::draw_ui(f, app, tui)).unwrap();
    }

    fn send(app: &mut App, tui: &mut TuiState, events: impl IntoIterator<Item = TuiEvent>) {
        for event in events {
            assert!(!handle_event(app, tui, event));
            draw(app, tui);
        }
    }

    fn typed(s: &str) -> Vec<TuiEvent> {
        s.chars().map(TuiEvent::InputChar).collect()
    }

    fn first_card_point(tui: &TuiState) -> Position {
        let viewport = tui.grid.viewport;
        Position::new(viewport.x + 3, viewport.y + 1)
    }

    #[test]
    fn test_click_form_type_then_click_outside_creates_note() {
        let mut app = test_app();
        let mut tui = tui();
        draw(&app, &mut tui);

        let form = tui.form_area;
        send(&mut app, &mut tui, [TuiEvent::MouseClick(form.x + 2, form.y + 1)]);
        assert!(app.creation.is_open());

        send(&mut app, &mut tui, typed("Groceries"));
        send(&mut app, &mut tui, [TuiEvent::Tab]);
        send(&mut app, &mut tui, typed("milk, eggs"));
        send(&mut app, &mut tui, [TuiEvent::MouseClick(0, 29)]);

        assert!(!app.creation.is_open());
        let notes = app.store.list();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Groceries");
        assert_eq!(notes[0].text, "milk, eggs");
    }

    #[test]
    fn test_click_outside_empty_form_discards() {
        let mut app = test_app();
        let mut tui = tui();
        draw(&app, &mut tui);
        send(&mut app, &mut tui, [TuiEvent::InputChar('n')]);
        assert!(app.creation.is_open());
        send(&mut app, &mut tui, [TuiEvent::MouseClick(0, 29)]);
        assert!(!app.creation.is_open());
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_form_close_button_discards_draft() {
        let mut app = test_app();
        let mut tui = tui();
        draw(&app, &mut tui);
        send(&mut app, &mut tui, [TuiEvent::InputChar('n')]);
        send(&mut app, &mut tui, typed("half a thought"));

        let close = tui.form_close.expect("open form has a close button");
        send(&mut app, &mut tui, [TuiEvent::MouseClick(close.x + 1, close.y)]);
        assert!(!app.creation.is_open());
        assert!(app.store.is_empty());
        assert!(tui.form_close.is_none());
    }

    #[test]
    fn test_ctrl_d_discards_draft() {
        let mut app = test_app();
        let mut tui = tui();
        draw(&app, &mut tui);
        send(&mut app, &mut tui, [TuiEvent::InputChar('n')]);
        send(&mut app, &mut tui, typed("scratch"));
        send(&mut app, &mut tui, [TuiEvent::Discard]);
        assert!(!app.creation.is_open());
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_click_card_while_form_open_only_closes_form() {
        let mut app = test_app_with(vec![Note::new(1, "a", "")]);
        let mut tui = tui();
        draw(&app, &mut tui);
        send(&mut app, &mut tui, [TuiEvent::InputChar('n')]);
        let card = first_card_point(&tui);
        send(&mut app, &mut tui, [TuiEvent::MouseClick(card.x, card.y)]);
        assert!(!app.creation.is_open());
        assert!(!app.selection.is_overlay_open());
    }

    #[test]
    fn test_click_card_opens_overlay_and_escape_saves() {
        let mut app = test_app_with(vec![Note::new(1, "Groceries", "milk")]);
        let mut tui = tui();
        draw(&app, &mut tui);

        let card = first_card_point(&tui);
        send(&mut app, &mut tui, [TuiEvent::MouseClick(card.x, card.y)]);
        assert!(app.selection.is_overlay_open());

        send(&mut app, &mut tui, [TuiEvent::Tab]);
        send(&mut app, &mut tui, typed(", eggs"));
        send(&mut app, &mut tui, [TuiEvent::Escape]);

        assert!(!app.selection.is_overlay_open());
        assert_eq!(app.store.get(1).unwrap().text, "milk, eggs");
    }

    #[test]
    fn test_color_button_then_swatch_recolors() {
        let mut app = test_app_with(vec![Note::new(1, "a", "")]);
        let mut tui = tui();
        draw(&app, &mut tui);

        // Color button sits on the toolbar row, one column inside the border
        let card = tui.grid.viewport;
        let toolbar_row = card.y + tui.card.height() - 2;
        send(&mut app, &mut tui, [TuiEvent::MouseClick(card.x + 2, toolbar_row)]);
        assert!(tui.picker.is_some());
        assert_eq!(app.selection.selected_id(), Some(1));

        let swatch = ColorPickerState::swatch_rects(ColorPickerState::area(tui.screen))[6];
        send(&mut app, &mut tui, [TuiEvent::MouseClick(swatch.x + 1, swatch.y)]);
        assert!(tui.picker.is_none());
        assert_eq!(app.store.get(1).unwrap().color, "blue");
    }

    #[test]
    fn test_delete_button_removes_note() {
        let mut app = test_app_with(vec![Note::new(1, "a", ""), Note::new(2, "b", "")]);
        let mut tui = tui();
        draw(&app, &mut tui);

        let card = tui.grid.viewport;
        let toolbar_row = card.y + tui.card.height() - 2;
        // "✕ del" ends one column before the right border
        let delete_x = card.x + tui.card.width - 3;
        send(&mut app, &mut tui, [TuiEvent::MouseClick(delete_x, toolbar_row)]);

        let ids: Vec<_> = app.store.list().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_keyboard_recolor_and_delete() {
        let mut app = test_app_with(vec![Note::new(1, "a", ""), Note::new(2, "b", "")]);
        let mut tui = tui();
        draw(&app, &mut tui);

        send(&mut app, &mut tui, [TuiEvent::CursorRight, TuiEvent::InputChar('c')]);
        assert!(tui.picker.is_some());
        send(&mut app, &mut tui, [TuiEvent::CursorRight, TuiEvent::Enter]);
        assert_eq!(app.store.get(2).unwrap().color, "red");

        send(&mut app, &mut tui, [TuiEvent::InputChar('d')]);
        assert!(app.store.get(2).is_none());
        assert_eq!(tui.grid.cursor, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        let mut tui = tui();
        assert!(handle_event(&mut app, &mut tui, TuiEvent::InputChar('q')));
        assert!(handle_event(&mut app, &mut tui, TuiEvent::ForceQuit));

        // While typing, 'q' is just text
        handle_event(&mut app, &mut tui, TuiEvent::InputChar('n'));
        assert!(!handle_event(&mut app, &mut tui, TuiEvent::InputChar('q')));
    }

    #[test]
    fn test_shutdown_commits_open_draft() {
        let mut app = test_app();
        update(&mut app, Action::OpenCreation);
        for c in "last words".chars() {
            update(&mut app, Action::EditDraft(crate::core::fields::FieldEdit::Insert(c)));
        }
        shutdown(&mut app);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.list()[0].title, "last words");
    }
}
