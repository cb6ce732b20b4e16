use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the sign-in screen that can draw itself.
///
/// Props (data from `State` or the adapter) are struct fields, set by the
/// parent before each frame. `render` takes `&mut self` so stateful widgets
/// can update caches such as a horizontal scroll offset while drawing.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that reacts to terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
