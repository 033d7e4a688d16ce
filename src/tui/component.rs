use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the location screen that draws itself into a `Rect`.
///
/// Props are plain struct fields, usually borrowed from the presenter's
/// `RenderedView`, so a component is rebuilt every frame and holds no state
/// between draws.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
