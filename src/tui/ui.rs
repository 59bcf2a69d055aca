//! Screen layout.
//!
//! ```text
//! ┌ title bar ──────────────────────────────┐  1 row
//! │        [ creation form (≤ 60 wide) ]    │  3 rows closed, 6 open
//! │ ┌card┐ ┌card┐ ┌card┐                    │
//! │ └────┘ └────┘ └────┘   (scrolls)        │  rest
//! └ help line / last write error ───────────┘  1 row
//! ```
//!
//! The edit overlay and the color picker are drawn last, over everything.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ColorPicker, EditOverlay, EmptyState, NoteForm, NoteGrid, TitleBar, centered_fixed,
};
use crate::tui::intent::Focus;

const FORM_MAX_WIDTH: u16 = 60;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};

    let screen = frame.area();
    tui.screen = screen;

    let mut form = NoteForm::new(app.creation.draft());
    let layout = Layout::vertical([Length(1), Length(form.height()), Min(0), Length(1)]);
    let [title_area, form_row, grid_area, help_area] = layout.areas(screen);

    TitleBar::new(app.store.len(), app.status_message.clone()).render(frame, title_area);

    let form_area = centered_fixed(FORM_MAX_WIDTH, form_row.height, form_row);
    form.render(frame, form_area);
    tui.form_area = form_area;
    tui.form_close = app.creation.is_open().then(|| NoteForm::close_button(form_area));

    let notes = app.store.list();
    NoteGrid::new(&mut tui.grid, notes, app.selection.selected_id(), tui.card).render(frame, grid_area);
    if notes.is_empty() {
        EmptyState.render(frame, grid_area);
    }

    frame.render_widget(help_line(app, Focus::of(app, tui)), help_area);

    tui.overlay_area = None;
    if let (Some(selection), Some(fields)) = (app.selection.selection(), app.selection.overlay_fields()) {
        EditOverlay::new(selection.id, fields).render(frame, screen);
        tui.overlay_area = Some(EditOverlay::area(screen));
    }

    if let Some(picker) = &tui.picker {
        ColorPicker::new(picker).render(frame, screen);
    }
}

fn help_line(app: &App, focus: Focus) -> Paragraph<'static> {
    if let Some(error) = &app.error {
        return Paragraph::new(Line::from(Span::styled(
            format!("Error: {}", error),
            Style::default().fg(Color::Red),
        )));
    }
    let hint = match focus {
        Focus::Grid => "n new · arrows move · Enter edit · c color · d delete · q quit",
        Focus::Form => "Tab field · Ctrl+S add · Ctrl+D or ✕ discard · Esc or click outside to close",
        Focus::Overlay => "Tab field · Esc or click outside to save",
        Focus::Picker => "arrows choose · Enter pick · Esc cancel",
    };
    Paragraph::new(Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))))
}
