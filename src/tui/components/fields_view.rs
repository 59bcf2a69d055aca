//! Title line + wrapped text body, shared by the creation form and the
//! edit overlay. Places the terminal cursor at the end of the focused field.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::fields::{Field, TextFields};
use crate::tui::component::Component;
use crate::tui::components::tail_width;

pub struct FieldsView<'a> {
    pub fields: &'a TextFields,
    pub text_placeholder: &'static str,
}

impl<'a> FieldsView<'a> {
    pub fn new(fields: &'a TextFields, text_placeholder: &'static str) -> Self {
        Self {
            fields,
            text_placeholder,
        }
    }

    /// The body wrapped to `width`, keeping only the last `max_lines` lines.
    fn body_lines(&self, width: u16, max_lines: u16) -> Vec<String> {
        let width = width.max(1) as usize;
        let wrapped: Vec<String> = textwrap::wrap(&self.fields.text, width)
            .into_iter()
            .map(|l| l.into_owned())
            .collect();
        let skip = wrapped.len().saturating_sub(max_lines as usize);
        wrapped.into_iter().skip(skip).collect()
    }
}

impl Component for FieldsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let placeholder = Style::default().fg(Color::DarkGray);
        let width = area.width as usize;

        let title = tail_width(&self.fields.title, width.saturating_sub(1));
        let title_line = if self.fields.title.is_empty() {
            Line::from(Span::styled("Title", placeholder))
        } else {
            Line::from(Span::styled(title, Style::default().add_modifier(Modifier::BOLD)))
        };

        let body_height = area.height.saturating_sub(1);
        let body = self.body_lines(area.width.saturating_sub(1), body_height);
        let mut lines = vec![title_line];
        if self.fields.text.is_empty() {
            lines.push(Line::from(Span::styled(self.text_placeholder, placeholder)));
        } else {
            lines.extend(body.iter().map(|l| Line::from(l.clone())));
        }
        frame.render_widget(Paragraph::new(lines), area);

        let cursor = match self.fields.focus {
            Field::Title => Position::new(area.x + title.width() as u16, area.y),
            Field::Text if body_height == 0 => return,
            Field::Text => {
                let last = body.last().map(|l| l.width()).unwrap_or(0) as u16;
                let row = body.len().saturating_sub(1) as u16;
                Position::new(area.x + last, area.y + 1 + row)
            }
        };
        frame.set_cursor_position(cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(fields: &TextFields, width: u16, height: u16) -> (String, Position) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| FieldsView::new(fields, "Take a note...").render(f, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        let cursor = terminal.get_cursor_position().unwrap();
        (text, cursor)
    }

    #[test]
    fn test_placeholders_when_empty() {
        let (text, cursor) = draw(&TextFields::default(), 30, 3);
        assert!(text.contains("Title"));
        assert!(text.contains("Take a note..."));
        assert_eq!(cursor, Position::new(0, 0));
    }

    #[test]
    fn test_cursor_follows_text_field() {
        let mut fields = TextFields::new("Groceries", "milk\neggs");
        fields.focus = Field::Text;
        let (text, cursor) = draw(&fields, 30, 4);
        assert!(text.contains("Groceries"));
        assert!(text.contains("milk"));
        assert_eq!(cursor, Position::new(4, 2));
    }

    #[test]
    fn test_long_body_shows_last_lines() {
        let mut fields = TextFields::new("t", "one\ntwo\nthree\nfour");
        fields.focus = Field::Text;
        let (text, _) = draw(&fields, 20, 3);
        assert!(text.contains("three"));
        assert!(text.contains("four"));
        assert!(!text.contains("one"));
    }
}
