use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something drawn into a region of the screen.
///
/// Props come in through struct fields (a draft, a note list, a status
/// line). Stateful pieces such as the note grid borrow their persistent
/// state mutably, so `render` can write back what it measured: card
/// positions for click hit testing, scroll clamps, the text cursor.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A piece of presentation state that consumes keys directly while it has
/// focus, like the color picker.
pub trait EventHandler {
    /// What the handler reports back to the event loop.
    type Event;

    /// Returns `None` when the key changed only local state (or nothing).
    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
