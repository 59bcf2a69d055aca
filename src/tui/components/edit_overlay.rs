//! # Edit Overlay
//!
//! Modal editor for the selected note, pre-filled from the selection.
//! Closing it (Esc, Ctrl+S or a click outside) saves what it holds.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Padding};

use crate::core::fields::TextFields;
use crate::core::note::NoteId;
use crate::tui::component::Component;
use crate::tui::components::{FieldsView, centered_rect};

pub struct EditOverlay<'a> {
    pub note_id: NoteId,
    pub fields: &'a TextFields,
}

impl<'a> EditOverlay<'a> {
    pub fn new(note_id: NoteId, fields: &'a TextFields) -> Self {
        Self { note_id, fields }
    }

    /// Where the overlay sits within `area`.
    pub fn area(area: Rect) -> Rect {
        centered_rect(70, 60, area)
    }
}

impl Component for EditOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = Self::area(area);
        frame.render_widget(Clear, overlay);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" Edit note {} ", self.note_id))
            .title_bottom(Line::from(" Tab field · Esc save & close ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        FieldsView::new(self.fields, "Note").render(frame, inner);
    }
}
