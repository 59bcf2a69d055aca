//! # Color Picker Component
//!
//! Small overlay listing the palette. Opened from a card's color button
//! (or `c`), it emits the chosen color token; the note it applies to is
//! whatever the core selection points at.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `ColorPickerState` lives in `TuiState`
//! - `ColorPicker` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::core::palette::PALETTE;
use crate::tui::component::EventHandler;
use crate::tui::components::centered_fixed;
use crate::tui::event::TuiEvent;
use crate::tui::theme;

const COLUMNS: usize = 4;
const SWATCH_WIDTH: u16 = 10;

/// Persistent state for the picker overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPickerState {
    pub selected: usize,
}

/// Events emitted by the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Pick(&'static str),
    Dismiss,
}

impl ColorPickerState {
    /// Start on the note's current color when it is in the palette.
    pub fn new(current: &str) -> Self {
        let selected = PALETTE.iter().position(|c| *c == current).unwrap_or(0);
        Self { selected }
    }

    /// Where the picker sits within `area`.
    pub fn area(area: Rect) -> Rect {
        let rows = PALETTE.len().div_ceil(COLUMNS) as u16;
        centered_fixed(COLUMNS as u16 * SWATCH_WIDTH + 2, rows + 2, area)
    }

    /// One rect per palette entry, in palette order.
    pub fn swatch_rects(picker: Rect) -> Vec<Rect> {
        let inner = Rect::new(
            picker.x + 1,
            picker.y + 1,
            picker.width.saturating_sub(2),
            picker.height.saturating_sub(2),
        );
        (0..PALETTE.len())
            .map(|i| {
                let col = (i % COLUMNS) as u16;
                let row = (i / COLUMNS) as u16;
                Rect::new(inner.x + col * SWATCH_WIDTH, inner.y + row, SWATCH_WIDTH, 1)
                    .intersection(inner)
            })
            .collect()
    }

    /// Index of the swatch under a screen position, if any.
    pub fn swatch_at(area: Rect, col: u16, row: u16) -> Option<usize> {
        Self::swatch_rects(Self::area(area))
            .iter()
            .position(|r| r.contains(Position::new(col, row)))
    }

    fn step(&mut self, delta: isize) {
        let len = PALETTE.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }
}

impl EventHandler for ColorPickerState {
    type Event = PickerEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<PickerEvent> {
        match event {
            TuiEvent::Escape => Some(PickerEvent::Dismiss),
            TuiEvent::CursorLeft => {
                self.step(-1);
                None
            }
            TuiEvent::CursorRight | TuiEvent::Tab => {
                self.step(1);
                None
            }
            TuiEvent::CursorUp => {
                self.step(-(COLUMNS as isize));
                None
            }
            TuiEvent::CursorDown => {
                self.step(COLUMNS as isize);
                None
            }
            TuiEvent::Enter | TuiEvent::InputChar(' ') => Some(PickerEvent::Pick(PALETTE[self.selected])),
            _ => None,
        }
    }
}

/// Transient render wrapper for the picker overlay.
pub struct ColorPicker<'a> {
    state: &'a ColorPickerState,
}

impl<'a> ColorPicker<'a> {
    pub fn new(state: &'a ColorPickerState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let picker = ColorPickerState::area(area);
        frame.render_widget(Clear, picker);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Color ")
            .title_bottom(Line::from(" Enter pick · Esc back ").centered());
        frame.render_widget(block, picker);

        for (i, rect) in ColorPickerState::swatch_rects(picker).into_iter().enumerate() {
            let token = PALETTE[i];
            let mut style = Style::default()
                .bg(theme::background(token))
                .fg(theme::foreground(token));
            let label = if i == self.state.selected {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                format!("▸{:<9}", token)
            } else {
                format!(" {:<9}", token)
            };
            frame.render_widget(Paragraph::new(label).style(style), rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_starts_on_current_color() {
        assert_eq!(PALETTE[ColorPickerState::new("teal").selected], "teal");
        assert_eq!(ColorPickerState::new("not-a-color").selected, 0);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut picker = ColorPickerState::new("white");
        picker.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(picker.selected, PALETTE.len() - 1);
        picker.handle_event(&TuiEvent::CursorRight);
        assert_eq!(picker.selected, 0);
        picker.handle_event(&TuiEvent::CursorDown);
        assert_eq!(picker.selected, COLUMNS);
    }

    #[test]
    fn test_enter_picks_and_escape_dismisses() {
        let mut picker = ColorPickerState::new("red");
        assert_eq!(picker.handle_event(&TuiEvent::Enter), Some(PickerEvent::Pick("red")));
        assert_eq!(picker.handle_event(&TuiEvent::Escape), Some(PickerEvent::Dismiss));
        assert_eq!(picker.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_swatch_hit_testing() {
        let screen = Rect::new(0, 0, 80, 24);
        let rects = ColorPickerState::swatch_rects(ColorPickerState::area(screen));
        assert_eq!(rects.len(), PALETTE.len());

        let third = rects[2];
        assert_eq!(ColorPickerState::swatch_at(screen, third.x + 1, third.y), Some(2));
        assert_eq!(ColorPickerState::swatch_at(screen, 0, 0), None);
    }

    #[test]
    fn test_render_lists_palette() {
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let state = ColorPickerState::new("white");
        terminal
            .draw(|f| ColorPicker::new(&state).render(f, f.area()))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Color"));
        assert!(text.contains("▸white"));
        assert!(text.contains("darkblue"));
    }
}
