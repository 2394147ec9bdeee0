use ratatui::Frame;
use ratatui::layout::Rect;

use super::event::TuiEvent;

/// Something that draws itself into a region of the frame.
///
/// Shelf splits every screen and list in two:
/// - a persistent `*State` owned by `TuiState` (selection, typed text,
///   focus) that survives between frames;
/// - a wrapper built fresh each frame that borrows that state plus the
///   core data it shows (`BookList`, `HomeScreen`, `UpdateScreen`, ...).
///
/// Small widgets with no outside data, like `TextField`, are their own
/// state and draw directly. `render` takes `&mut self` because drawing
/// writes back into the borrowed state: a list syncs its length and
/// ratatui's scroll offset so the selection stays valid and on screen.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Turns raw key events into the small event vocabulary of one widget.
///
/// Implemented by the persistent states of reusable widgets (`TextField`
/// emits `FieldEvent`, `BookListState` emits `ListEvent`). Screens read
/// those events and decide which `Action` to send to the core, since only
/// they can see `App`.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
