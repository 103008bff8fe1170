use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive data via props (struct fields, usually borrowed from
/// the controller) and render to a `Frame` within a given `Rect`.
///
/// # Mutability
///
/// `render` takes `&mut self` so a component may cache layout work between
/// frames, matching Ratatui's `StatefulWidget` pattern.
pub trait Component {
    /// Render the component into the given area.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
