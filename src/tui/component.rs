use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive the data they show as props (struct fields), usually
/// borrowed from `App`, and render into a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so a component may keep presentation caches
/// between frames, as Ratatui's `StatefulWidget` does.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
