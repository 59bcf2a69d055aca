//! # NoteGrid Component
//!
//! Scrollable grid of note cards, laid out in creation order, left to right
//! and top to bottom.
//!
//! ```text
//! ╭────────────────────────────╮ ╭────────────────────────────╮
//! │Groceries                   │ │Todo                        │
//! │milk, eggs                  │ │                            │
//! │ ...                        │ │ ...                        │
//! │◐ color                ✕ del│ │◐ color                ✕ del│
//! ╰────────────────────────────╯ ╰────────────────────────────╯
//! ```
//!
//! `NoteGrid` is transient (created each frame) and wraps
//! `&'a mut NoteGridState`. Rendering records where every card landed so
//! mouse clicks can be resolved to a card and its toolbar buttons.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};
use unicode_width::UnicodeWidthStr;

use log::debug;

use crate::core::note::{Note, NoteId};
use crate::tui::component::Component;
use crate::tui::components::truncate_width;
use crate::tui::theme;

const COLOR_LABEL: &str = "◐ color";
const DELETE_LABEL: &str = "✕ del";
/// Columns between neighbouring cards.
const GAP: u16 = 1;

/// Dimensions of a single card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSize {
    pub width: u16,
    pub text_lines: u16,
}

impl CardSize {
    /// Borders, title row, text rows and toolbar row.
    pub fn height(&self) -> u16 {
        self.text_lines.saturating_add(4)
    }
}

/// What part of a card a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTarget {
    Delete(NoteId),
    Color(NoteId),
    Body(NoteId),
}

/// Cursor movement within the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Up,
    Down,
    Left,
    Right,
}

/// Where a card was drawn, in content (unscrolled) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CardHit {
    id: NoteId,
    area: Rect,
}

/// Number of cards that fit side by side in `width` columns.
pub fn columns_for(width: u16, card: CardSize) -> usize {
    let card_width = card.width.min(width).max(1);
    (width.saturating_add(GAP) / card_width.saturating_add(GAP)).max(1) as usize
}

/// Rows of cards that fit on the scroll canvas, whose height is a `u16`.
fn max_rows(card: CardSize) -> usize {
    (u16::MAX / card.height().max(1)) as usize
}

/// Position of card `index` on the canvas, or `None` past the canvas end.
fn card_rect(index: usize, columns: usize, width: u16, card: CardSize) -> Option<Rect> {
    let row = index / columns;
    if row >= max_rows(card) {
        return None;
    }
    let col = (index % columns) as u16;
    let x = col.checked_mul(width.saturating_add(GAP))?;
    let y = (row as u16).checked_mul(card.height())?;
    Some(Rect::new(x, y, width, card.height()))
}

fn color_button(card: Rect) -> Rect {
    let row = card.y + card.height.saturating_sub(2);
    let width = (COLOR_LABEL.width() as u16).min(card.width.saturating_sub(2));
    Rect::new(card.x + 1, row, width, 1)
}

fn delete_button(card: Rect) -> Rect {
    let row = card.y + card.height.saturating_sub(2);
    let width = (DELETE_LABEL.width() as u16).min(card.width.saturating_sub(2));
    let x = (card.x + card.width).saturating_sub(1 + width).max(card.x + 1);
    Rect::new(x, row, width, 1)
}

/// Cursor, scroll and hit-test state for the grid.
/// Must be persisted in the parent TuiState.
#[derive(Debug, Default)]
pub struct NoteGridState {
    /// Index of the card under the keyboard cursor
    pub cursor: usize,
    pub scroll_state: ScrollViewState,
    /// Columns used by the last render (for vertical cursor moves)
    pub columns: usize,
    /// Screen area the grid was last drawn into
    pub viewport: Rect,
    /// When true, the next render scrolls the cursor card into view
    pub follow_cursor: bool,
    cards: Vec<CardHit>,
    content_height: u16,
}

impl NoteGridState {
    pub fn new() -> Self {
        Self {
            columns: 1,
            ..Default::default()
        }
    }

    /// Keep the cursor on an existing card after the collection shrinks.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn move_cursor(&mut self, direction: GridMove, len: usize) {
        if len == 0 {
            return;
        }
        let columns = self.columns.max(1);
        self.cursor = match direction {
            GridMove::Left => self.cursor.saturating_sub(1),
            GridMove::Right => (self.cursor + 1).min(len - 1),
            GridMove::Up if self.cursor >= columns => self.cursor - columns,
            GridMove::Up => self.cursor,
            GridMove::Down if self.cursor + columns < len => self.cursor + columns,
            GridMove::Down => self.cursor,
        };
        self.follow_cursor = true;
    }

    /// Put the cursor on card `index` and bring it into view.
    pub fn focus(&mut self, index: usize) {
        self.cursor = index;
        self.follow_cursor = true;
    }

    /// Id of the note under the cursor.
    pub fn cursor_id(&self, notes: &[Note]) -> Option<NoteId> {
        notes.get(self.cursor).map(|n| n.id)
    }

    pub fn scroll_up(&mut self, lines: u16) {
        let offset = self.scroll_state.offset();
        self.scroll_state
            .set_offset(Position::new(offset.x, offset.y.saturating_sub(lines)));
        self.follow_cursor = false;
    }

    pub fn scroll_down(&mut self, lines: u16) {
        let offset = self.scroll_state.offset();
        self.scroll_state
            .set_offset(Position::new(offset.x, offset.y.saturating_add(lines)));
        self.clamp_scroll();
        self.follow_cursor = false;
    }

    fn max_scroll(&self) -> u16 {
        self.content_height.saturating_sub(self.viewport.height)
    }

    fn clamp_scroll(&mut self) {
        let offset = self.scroll_state.offset();
        let max_y = self.max_scroll();
        if offset.y > max_y {
            self.scroll_state.set_offset(Position::new(offset.x, max_y));
        }
    }

    /// Scroll just enough that the card at `area` is fully visible.
    fn reveal(&mut self, area: Rect) {
        let offset_y = self.scroll_state.offset().y;
        let bottom = area.y.saturating_add(area.height);
        if area.y < offset_y {
            self.scroll_state.set_offset(Position::new(0, area.y));
        } else if bottom > offset_y.saturating_add(self.viewport.height) {
            let y = bottom.saturating_sub(self.viewport.height);
            self.scroll_state.set_offset(Position::new(0, y));
        }
    }

    /// Resolve a screen position to a card. Delete wins over color, which
    /// wins over the card body.
    pub fn hit(&self, col: u16, row: u16) -> Option<CardTarget> {
        if !self.viewport.contains(Position::new(col, row)) {
            return None;
        }
        let content = Position::new(
            col - self.viewport.x,
            (row - self.viewport.y).saturating_add(self.scroll_state.offset().y),
        );
        let card = self.cards.iter().find(|c| c.area.contains(content))?;
        if delete_button(card.area).contains(content) {
            Some(CardTarget::Delete(card.id))
        } else if color_button(card.area).contains(content) {
            Some(CardTarget::Color(card.id))
        } else {
            Some(CardTarget::Body(card.id))
        }
    }
}

/// Transient render wrapper for the card grid.
pub struct NoteGrid<'a> {
    state: &'a mut NoteGridState,
    notes: &'a [Note],
    selected: Option<NoteId>,
    card: CardSize,
}

impl<'a> NoteGrid<'a> {
    pub fn new(
        state: &'a mut NoteGridState,
        notes: &'a [Note],
        selected: Option<NoteId>,
        card: CardSize,
    ) -> Self {
        Self {
            state,
            notes,
            selected,
            card,
        }
    }

    fn card_widget(&self, note: &Note, width: u16, is_cursor: bool) -> Paragraph<'static> {
        let inner_width = width.saturating_sub(2) as usize;
        let is_selected = self.selected == Some(note.id);

        let border_type = if is_selected {
            BorderType::Double
        } else if is_cursor {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        let mut border_style = Style::default();
        if is_cursor || is_selected {
            border_style = border_style.add_modifier(Modifier::BOLD);
        }
        let block = Block::bordered()
            .border_type(border_type)
            .border_style(border_style)
            .style(
                Style::default()
                    .bg(theme::background(&note.color))
                    .fg(theme::foreground(&note.color)),
            );

        let mut lines = Vec::with_capacity(self.card.height() as usize);
        lines.push(Line::from(Span::styled(
            truncate_width(&note.title, inner_width),
            Style::default().add_modifier(Modifier::BOLD),
        )));

        let wrapped = textwrap::wrap(&note.text, inner_width.max(1));
        let shown = self.card.text_lines as usize;
        for (i, line) in wrapped.iter().take(shown).enumerate() {
            let text = if i + 1 == shown && wrapped.len() > shown {
                // Force an ellipsis on the last visible line
                truncate_width(&format!("{line}…"), inner_width)
            } else {
                line.to_string()
            };
            lines.push(Line::from(text));
        }
        while lines.len() < shown + 1 {
            lines.push(Line::default());
        }

        let padding = inner_width.saturating_sub(COLOR_LABEL.width() + DELETE_LABEL.width());
        lines.push(Line::from(vec![
            Span::raw(COLOR_LABEL),
            Span::raw(" ".repeat(padding)),
            Span::raw(DELETE_LABEL),
        ]));

        Paragraph::new(lines).block(block)
    }
}

impl Component for NoteGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.viewport = area;
        self.state.clamp(self.notes.len());
        if area.width < 2 || area.height == 0 {
            self.state.cards.clear();
            return;
        }

        // Leave the last column for the scrollbar
        let content_width = area.width - 1;
        let card_width = self.card.width.min(content_width);
        let columns = columns_for(content_width, self.card);
        let rows = self.notes.len().div_ceil(columns);
        if rows > max_rows(self.card) {
            debug!(
                "Grid canvas holds {} of {} card rows",
                max_rows(self.card),
                rows
            );
        }
        let rows = rows.min(max_rows(self.card)) as u16;
        self.state.columns = columns;
        self.state.content_height = rows * self.card.height();

        self.state.cards = self
            .notes
            .iter()
            .enumerate()
            .map_while(|(i, note)| {
                card_rect(i, columns, card_width, self.card).map(|area| CardHit { id: note.id, area })
            })
            .collect();

        if self.state.follow_cursor
            && let Some(card) = self.state.cards.get(self.state.cursor).copied()
        {
            self.state.reveal(card.area);
            self.state.follow_cursor = false;
        }
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, self.state.content_height.max(1)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let offset_y = self.state.scroll_state.offset().y;
        let window_end = offset_y.saturating_add(area.height);
        for (i, (note, card)) in self.notes.iter().zip(&self.state.cards).enumerate() {
            let rect = card.area;
            // Cards entirely outside the viewport are skipped
            if rect.y + rect.height <= offset_y || rect.y >= window_end {
                continue;
            }
            let widget = self.card_widget(note, card_width, i == self.state.cursor);
            scroll_view.render_widget(widget, rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    const CARD: CardSize = CardSize {
        width: 20,
        text_lines: 2,
    };

    fn notes(n: u64) -> Vec<Note> {
        (1..=n).map(|i| Note::new(i, format!("Note {i}"), "body")).collect()
    }

    fn render(state: &mut NoteGridState, notes: &[Note], selected: Option<NoteId>, w: u16, h: u16) -> String {
        let backend = TestBackend::new(w, h);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| NoteGrid::new(state, notes, selected, CARD).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_columns_for() {
        assert_eq!(columns_for(20, CARD), 1);
        assert_eq!(columns_for(41, CARD), 2);
        assert_eq!(columns_for(40, CARD), 1);
        assert_eq!(columns_for(5, CARD), 1);
    }

    #[test]
    fn test_toolbar_buttons_do_not_overlap() {
        let card = Rect::new(0, 0, 20, CARD.height());
        let color = color_button(card);
        let delete = delete_button(card);
        assert_eq!(color.y, delete.y);
        assert!(color.x + color.width <= delete.x);
        assert_eq!(delete.x + delete.width, card.width - 1);
    }

    #[test]
    fn test_render_shows_titles_and_toolbar() {
        let mut state = NoteGridState::new();
        let text = render(&mut state, &notes(2), None, 50, 12);
        assert!(text.contains("Note 1"));
        assert!(text.contains("Note 2"));
        assert!(text.contains("◐ color"));
        assert!(text.contains("✕ del"));
        assert_eq!(state.columns, 2);
    }

    #[test]
    fn test_long_text_is_truncated_with_ellipsis() {
        let mut state = NoteGridState::new();
        let long = vec![Note::new(1, "T", "one two three four five six seven eight nine ten eleven")];
        let text = render(&mut state, &long, None, 30, 12);
        assert!(text.contains('…'));
    }

    #[test]
    fn test_hit_resolves_buttons_and_body() {
        let mut state = NoteGridState::new();
        render(&mut state, &notes(2), None, 50, 12);

        let first = Rect::new(0, 0, 20, CARD.height());
        let delete = delete_button(first);
        let color = color_button(first);
        assert_eq!(state.hit(delete.x, delete.y), Some(CardTarget::Delete(1)));
        assert_eq!(state.hit(color.x, color.y), Some(CardTarget::Color(1)));
        assert_eq!(state.hit(5, 1), Some(CardTarget::Body(1)));
        assert_eq!(state.hit(25, 1), Some(CardTarget::Body(2)));
        // The gap between cards and empty space are not cards
        assert_eq!(state.hit(20, 1), None);
        assert_eq!(state.hit(5, 10), None);
    }

    #[test]
    fn test_hit_accounts_for_scroll_offset() {
        let mut state = NoteGridState::new();
        let all = notes(4);
        // One column, viewport shows a single card
        render(&mut state, &all, None, 22, CARD.height());
        state.scroll_down(CARD.height());
        render(&mut state, &all, None, 22, CARD.height());
        assert_eq!(state.hit(5, 1), Some(CardTarget::Body(2)));
    }

    #[test]
    fn test_cursor_moves_by_row_and_column() {
        let mut state = NoteGridState::new();
        state.columns = 3;
        state.move_cursor(GridMove::Right, 7);
        assert_eq!(state.cursor, 1);
        state.move_cursor(GridMove::Down, 7);
        assert_eq!(state.cursor, 4);
        // No card below index 4 in a 7-card, 3-column grid
        state.move_cursor(GridMove::Down, 7);
        assert_eq!(state.cursor, 4);
        state.move_cursor(GridMove::Up, 7);
        assert_eq!(state.cursor, 1);
        state.move_cursor(GridMove::Left, 7);
        state.move_cursor(GridMove::Left, 7);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_following_cursor_scrolls_it_into_view() {
        let mut state = NoteGridState::new();
        let all = notes(5);
        render(&mut state, &all, None, 22, CARD.height());
        state.focus(3);
        render(&mut state, &all, None, 22, CARD.height());
        assert_eq!(state.scroll_state.offset().y, 3 * CARD.height());
        assert_eq!(state.hit(5, 1), Some(CardTarget::Body(4)));
    }

    #[test]
    fn test_card_height_saturates() {
        let tall = CardSize {
            width: 30,
            text_lines: u16::MAX,
        };
        assert_eq!(tall.height(), u16::MAX);
        assert_eq!(max_rows(tall), 1);
    }

    #[test]
    fn test_huge_collection_is_capped_to_canvas() {
        let card = CardSize {
            width: 30,
            text_lines: 4,
        };
        let all: Vec<Note> = (1..=9000).map(|i| Note::new(i, format!("n{i}"), "")).collect();
        let mut state = NoteGridState::new();

        let draw = |state: &mut NoteGridState| {
            let backend = TestBackend::new(32, 24);
            let mut terminal = Terminal::new(backend).unwrap();
            terminal
                .draw(|f| NoteGrid::new(state, &all, None, card).render(f, f.area()))
                .unwrap();
        };

        // One column of 8-row cards: only u16::MAX / 8 rows fit
        draw(&mut state);
        assert_eq!(state.columns, 1);
        assert_eq!(state.cards.len(), 8191);
        assert_eq!(state.content_height, 8191 * 8);

        state.focus(8190);
        draw(&mut state);
        assert_eq!(state.scroll_state.offset().y, 8191 * 8 - 24);
        assert_eq!(state.hit(5, 23), Some(CardTarget::Body(8191)));

        // A cursor past the canvas neither panics nor scrolls
        state.focus(8999);
        draw(&mut state);
        assert_eq!(state.cursor_id(&all), Some(9000));
        state.scroll_down(u16::MAX);
        assert_eq!(state.scroll_state.offset().y, 8191 * 8 - 24);
    }

    #[test]
    fn test_clamp_after_collection_shrinks() {
        let mut state = NoteGridState::new();
        state.cursor = 5;
        state.clamp(2);
        assert_eq!(state.cursor, 1);
        state.clamp(0);
        assert_eq!(state.cursor, 0);
        assert_eq!(state.cursor_id(&[]), None);
    }
}
