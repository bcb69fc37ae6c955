use crate::tui::action::Action;
use color_eyre::Result;
use ratatui::{layout::Rect, Frame};

/// A dashboard widget.
///
/// Widgets own their view state (cursor, scroll) and render into the area the
/// shell hands them. The session lives in the shell, which reads selections
/// back from the widgets.
pub trait Component {
    /// `Ok(true)` when the action was consumed, `Ok(false)` to let the shell
    /// try the next receiver
    fn handle_action(&mut self, action: Action) -> Result<bool>;

    fn render(&mut self, frame: &mut Frame, area: Rect);

    /// Actions this widget reacts to
    fn supported_actions(&self) -> &[Action];

    fn name(&self) -> &str;
}

/// Widgets that take part in the Tab focus cycle
pub trait Focusable: Component {
    fn is_focused(&self) -> bool;

    fn set_focused(&mut self, focused: bool);
}
