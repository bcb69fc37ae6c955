use crate::tui::{Action, Component, Focusable, Theme};
use color_eyre::Result;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub const COLUMN_PICKER_TITLE: &str = "Select Additional Columns to Display";

/// Sidebar multi-select over the columns that have no fixed panel
pub struct ColumnPicker {
    options: Vec<String>,
    checked: Vec<String>,
    cursor: usize,
    focused: bool,
    supported_actions: Vec<Action>,
}

impl ColumnPicker {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            checked: Vec::new(),
            cursor: 0,
            focused: false,
            supported_actions: vec![
                Action::MoveUp,
                Action::MoveDown,
                Action::GoToTop,
                Action::GoToBottom,
                Action::Toggle,
                Action::Confirm,
            ],
        }
    }

    pub fn set_options(&mut self, options: Vec<String>) {
        self.options = options;
        self.cursor = self.cursor.min(self.options.len().saturating_sub(1));
    }

    /// Mirror of the session's picked columns, used only for the checkboxes
    pub fn set_checked(&mut self, checked: &[String]) {
        self.checked = checked.to_vec();
    }

    /// Column under the cursor
    pub fn highlighted(&self) -> Option<&str> {
        self.options.get(self.cursor).map(String::as_str)
    }
}

impl Default for ColumnPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ColumnPicker {
    fn handle_action(&mut self, action: Action) -> Result<bool> {
        let last = self.options.len().saturating_sub(1);
        match action {
            Action::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            Action::MoveDown => self.cursor = (self.cursor + 1).min(last),
            Action::GoToTop => self.cursor = 0,
            Action::GoToBottom => self.cursor = last,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = Theme::default();
        let block = Block::default()
            .borders(Borders::ALL)
            .title(COLUMN_PICKER_TITLE)
            .border_style(theme.border_for(self.focused));

        if self.options.is_empty() {
            let empty = List::new(vec![ListItem::new(Span::styled(
                "No additional columns",
                theme.muted_style(),
            ))])
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|opt| {
                let is_checked = self.checked.iter().any(|c| c == opt);
                let mark = if is_checked {
                    Span::styled("[x] ", theme.checked_style())
                } else {
                    Span::raw("[ ] ")
                };
                ListItem::new(Line::from(vec![mark, Span::raw(opt.as_str())]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(if self.focused {
                theme.selected_style()
            } else {
                theme.normal_style()
            });
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn supported_actions(&self) -> &[Action] {
        &self.supported_actions
    }

    fn name(&self) -> &str {
        "ColumnPicker"
    }
}

impl Focusable for ColumnPicker {
    fn is_focused(&self) -> bool {
        self.focused
    }

    fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut picker = ColumnPicker::new();
        picker.set_options(vec!["age".into(), "notes".into()]);

        assert_eq!(picker.highlighted(), Some("age"));
        picker.handle_action(Action::MoveDown).unwrap();
        picker.handle_action(Action::MoveDown).unwrap();
        assert_eq!(picker.highlighted(), Some("notes"));
        picker.handle_action(Action::GoToTop).unwrap();
        assert_eq!(picker.highlighted(), Some("age"));
        assert!(!picker.handle_action(Action::Quit).unwrap());
    }

    #[test]
    fn test_empty_picker_has_no_highlight() {
        let mut picker = ColumnPicker::new();
        picker.handle_action(Action::MoveDown).unwrap();
        assert_eq!(picker.highlighted(), None);
    }
}
