use crate::tui::{Action, Component, Focusable, Theme};
use color_eyre::Result;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub const ROW_SELECTOR_TITLE: &str = "Select Row";

/// Dropdown-style row picker: the cursor browses, Enter commits
pub struct RowSelector {
    labels: Vec<String>,
    cursor: usize,
    /// Entry the user last committed
    chosen: usize,
    page: usize,
    focused: bool,
    supported_actions: Vec<Action>,
}

impl RowSelector {
    pub fn new() -> Self {
        Self {
            labels: Vec::new(),
            cursor: 0,
            chosen: 0,
            page: 10,
            focused: false,
            supported_actions: vec![
                Action::MoveUp,
                Action::MoveDown,
                Action::PageUp,
                Action::PageDown,
                Action::GoToTop,
                Action::GoToBottom,
                Action::Confirm,
            ],
        }
    }

    /// Replace the labels, keeping the committed entry when it still exists
    pub fn set_labels(&mut self, labels: Vec<String>) {
        let last = labels.len().saturating_sub(1);
        self.labels = labels;
        self.cursor = self.cursor.min(last);
        self.chosen = self.chosen.min(last);
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.labels.get(self.cursor).map(String::as_str)
    }

    /// Commit the highlighted entry and return its label
    pub fn choose_highlighted(&mut self) -> Option<String> {
        let label = self.labels.get(self.cursor)?.clone();
        self.chosen = self.cursor;
        Some(label)
    }

    pub fn chosen_position(&self) -> usize {
        self.chosen
    }

    /// Move the committed marker to the row actually shown
    pub fn set_chosen(&mut self, index: usize) {
        self.chosen = index.min(self.labels.len().saturating_sub(1));
    }

    /// Put the cursor back on the committed entry
    pub fn reset_cursor(&mut self) {
        self.cursor = self.chosen;
    }
}

impl Default for RowSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for RowSelector {
    fn handle_action(&mut self, action: Action) -> Result<bool> {
        let last = self.labels.len().saturating_sub(1);
        match action {
            Action::MoveUp => self.cursor = self.cursor.saturating_sub(1),
            Action::MoveDown => self.cursor = (self.cursor + 1).min(last),
            Action::PageUp => self.cursor = self.cursor.saturating_sub(self.page),
            Action::PageDown => self.cursor = (self.cursor + self.page).min(last),
            Action::GoToTop => self.cursor = 0,
            Action::GoToBottom => self.cursor = last,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = Theme::default();
        self.page = area.height.saturating_sub(2).max(1) as usize;

        let items: Vec<ListItem> = self
            .labels
            .iter()
            .enumerate()
            .map(|(i, label)| {
                let marker = if i == self.chosen {
                    Span::styled("● ", theme.checked_style())
                } else {
                    Span::raw("  ")
                };
                ListItem::new(Line::from(vec![marker, Span::raw(label.as_str())]))
            })
            .collect();

        let title = format!(
            "{ROW_SELECTOR_TITLE} [{}/{}]",
            (self.cursor + 1).min(self.labels.len()),
            self.labels.len()
        );
        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(title)
                    .border_style(theme.border_for(self.focused)),
            )
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
        "RowSelector"
    }
}

impl Focusable for RowSelector {
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

    fn selector() -> RowSelector {
        let mut s = RowSelector::new();
        s.set_labels(vec![
            "A1 - nevus".into(),
            "B2 - melanoma".into(),
            "C3 - acne".into(),
        ]);
        s
    }

    #[test]
    fn test_browse_does_not_commit() {
        let mut s = selector();
        s.handle_action(Action::MoveDown).unwrap();
        assert_eq!(s.highlighted(), Some("B2 - melanoma"));
        assert_eq!(s.chosen_position(), 0);

        assert_eq!(s.choose_highlighted().as_deref(), Some("B2 - melanoma"));
        assert_eq!(s.chosen_position(), 1);
    }

    #[test]
    fn test_paging_clamps() {
        let mut s = selector();
        s.handle_action(Action::PageDown).unwrap();
        assert_eq!(s.highlighted(), Some("C3 - acne"));
        s.handle_action(Action::PageUp).unwrap();
        assert_eq!(s.highlighted(), Some("A1 - nevus"));
    }

    #[test]
    fn test_shrinking_labels_clamps_positions() {
        let mut s = selector();
        s.handle_action(Action::GoToBottom).unwrap();
        s.choose_highlighted();
        s.set_labels(vec!["A1 - nevus".into()]);
        assert_eq!(s.highlighted(), Some("A1 - nevus"));
        assert_eq!(s.chosen_position(), 0);
    }

    #[test]
    fn test_set_chosen_moves_marker_not_cursor() {
        let mut s = selector();
        s.handle_action(Action::MoveDown).unwrap();
        s.set_chosen(2);
        assert_eq!(s.chosen_position(), 2);
        assert_eq!(s.highlighted(), Some("B2 - melanoma"));

        s.reset_cursor();
        assert_eq!(s.highlighted(), Some("C3 - acne"));
        s.set_chosen(9);
        assert_eq!(s.chosen_position(), 2);
    }
}
