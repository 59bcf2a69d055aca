//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top bar with note count and status
//! - `NoteForm`: the creation surface, closed or holding a draft
//! - `EditOverlay`: modal editor for the selected note
//! - `EmptyState`: placeholder shown when there are no notes
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `NoteGrid`: scrollable card grid; remembers the cursor and where each
//!   card (and its toolbar buttons) was drawn so clicks can be hit tested
//! - `ColorPicker`: palette overlay that emits the chosen color
//!
//! Components receive note data as props from `App`; they never reach into
//! the store themselves.

mod color_picker;
mod edit_overlay;
mod empty_state;
mod fields_view;
mod note_form;
mod note_grid;
mod title_bar;

pub use color_picker::{ColorPicker, ColorPickerState, PickerEvent};
pub use edit_overlay::EditOverlay;
pub use empty_state::EmptyState;
pub use fields_view::FieldsView;
pub use note_form::NoteForm;
pub use note_grid::{CardSize, CardTarget, GridMove, NoteGrid, NoteGridState};
pub use title_bar::TitleBar;

use ratatui::layout::{Constraint, Layout, Rect};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// A rect of at most `width` x `height`, centered in `outer`.
pub fn centered_fixed(width: u16, height: u16, outer: Rect) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect::new(
        outer.x + (outer.width - width) / 2,
        outer.y + (outer.height - height) / 2,
        width,
        height,
    )
}

/// Truncate to `max_width` display columns, ending with "…" when cut.
pub fn truncate_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// The last `max_width` display columns of `s` (keeps the typing end visible).
pub fn tail_width(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (i, c) in s.char_indices().rev() {
        used += c.width().unwrap_or(0);
        if used > max_width {
            return &s[i + c.len_utf8()..];
        }
    }
    s
}
