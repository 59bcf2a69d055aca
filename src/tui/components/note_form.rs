//! # NoteForm Component
//!
//! The creation surface above the grid. Closed, it is a one-line prompt;
//! open, it shows the draft's title and text fields.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::fields::TextFields;
use crate::tui::component::Component;
use crate::tui::components::FieldsView;

/// Lines of draft text visible while the form is open.
const OPEN_TEXT_LINES: u16 = 3;
const CLOSE_LABEL: &str = " ✕ ";

pub struct NoteForm<'a> {
    /// `None` while the surface is closed.
    pub draft: Option<&'a TextFields>,
}

impl<'a> NoteForm<'a> {
    pub fn new(draft: Option<&'a TextFields>) -> Self {
        Self { draft }
    }

    /// Rows the form needs, borders included.
    pub fn height(&self) -> u16 {
        match self.draft {
            Some(_) => 2 + 1 + OPEN_TEXT_LINES,
            None => 3,
        }
    }

    /// The discard button on the open form's top border, right-aligned
    /// inside the corner.
    pub fn close_button(area: Rect) -> Rect {
        let width = 3.min(area.width.saturating_sub(2));
        Rect::new((area.x + area.width).saturating_sub(1 + width), area.y, width, 1)
    }
}

impl Component for NoteForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self.draft {
            None => {
                let prompt = Paragraph::new("Take a note...")
                    .style(Style::default().fg(Color::DarkGray))
                    .block(Block::bordered().border_type(BorderType::Rounded));
                frame.render_widget(prompt, area);
            }
            Some(fields) => {
                let block = Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Yellow))
                    .title(" New note ")
                    .title(Line::from(CLOSE_LABEL).right_aligned())
                    .title_bottom(
                        Line::from(" Tab field · Ctrl+S add · Ctrl+D discard · Esc close ").centered(),
                    );
                let inner = block.inner(area);
                frame.render_widget(block, area);
                FieldsView::new(fields, "Take a note...").render(frame, inner);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(form: &mut NoteForm, width: u16) -> String {
        let backend = TestBackend::new(width, form.height());
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| form.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_closed_form_is_a_prompt() {
        let mut form = NoteForm::new(None);
        assert_eq!(form.height(), 3);
        let text = rendered(&mut form, 50);
        assert!(text.contains("Take a note..."));
        assert!(!text.contains("New note"));
    }

    #[test]
    fn test_open_form_shows_draft() {
        let draft = TextFields::new("Todo", "call mom");
        let mut form = NoteForm::new(Some(&draft));
        assert_eq!(form.height(), 6);
        let text = rendered(&mut form, 50);
        assert!(text.contains("New note"));
        assert!(text.contains("Todo"));
        assert!(text.contains("call mom"));
    }

    #[test]
    fn test_close_button_drawn_where_it_is_hit() {
        let draft = TextFields::default();
        let mut form = NoteForm::new(Some(&draft));
        let backend = TestBackend::new(40, form.height());
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| form.render(f, f.area())).unwrap();

        let button = NoteForm::close_button(Rect::new(0, 0, 40, form.height()));
        assert_eq!(button, Rect::new(36, 0, 3, 1));
        let cell = &terminal.backend().buffer()[(button.x + 1, button.y)];
        assert_eq!(cell.symbol(), "✕");
    }
}
