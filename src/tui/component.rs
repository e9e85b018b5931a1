use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something that draws itself into a region of the collection view.
///
/// Props come in as struct fields; persistent state is borrowed
/// (`PosterGrid` wraps `&mut PosterGridState`).
///
/// `render` takes `&mut self` because drawing is also when the grid learns
/// its geometry: columns, content height and which listing key sits in
/// which cell. Scroll events and mouse hits between frames rely on it.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that consumes terminal input.
///
/// Returns `None` when the event was not for this component or changed
/// nothing the parent needs to hear about.
pub trait EventHandler {
    /// What the parent gets told (a new query, fresh scroll geometry).
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
