//! # TitleBar Component
//!
//! Top status bar: app name, how many notes there are, and the latest
//! status message ("Added note 3", "Note 2 no longer exists", ...).
//!
//! Stateless. It receives all data as props and renders a single line.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub note_count: usize,
    pub status_message: String,
}

impl TitleBar {
    pub fn new(note_count: usize, status_message: String) -> Self {
        Self {
            note_count,
            status_message,
        }
    }

    fn count_label(&self) -> String {
        match self.note_count {
            1 => "1 note".to_string(),
            n => format!("{} notes", n),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Jotter", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!(" ({})", self.count_label())),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.status_message)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(mut title_bar: TitleBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_title_bar_with_status() {
        let text = rendered(TitleBar::new(3, "Added note 3".to_string()));
        assert!(text.contains("Jotter"));
        assert!(text.contains("3 notes"));
        assert!(text.contains("| Added note 3"));
    }

    #[test]
    fn test_title_bar_singular_and_no_status() {
        let text = rendered(TitleBar::new(1, String::new()));
        assert!(text.contains("(1 note)"));
        assert!(!text.contains('|'));
    }
}
