use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data via props (struct fields), borrowed from
/// `AppContext` for the duration of one frame, and render to a `Frame`
/// within a given `Rect`.
///
/// The shell's components hold no state of their own, so rendering the same
/// props twice produces the same cells.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
