use crate::core::Dataset;
use crate::tui::{Action, Component, Focusable, Theme};
use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table},
    Frame,
};

pub const DATA_PREVIEW_TITLE: &str = "Data Preview";

const MIN_COL_WIDTH: usize = 6;
const MAX_COL_WIDTH: usize = 28;

/// Position in the table (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// Viewport into the dataset
#[derive(Debug, Clone)]
pub struct Viewport {
    pub top: usize,    // First visible row
    pub left: usize,   // First visible column
    pub height: usize, // Visible rows
}

/// Scrollable read-only view of the whole dataset
pub struct DataPreview {
    dataset: Dataset,
    column_names: Vec<String>,
    cursor: Position,
    viewport: Viewport,
    focused: bool,
    supported_actions: Vec<Action>,
}

impl DataPreview {
    pub fn new(dataset: Dataset) -> Self {
        let column_names = dataset.column_names();
        Self {
            dataset,
            column_names,
            cursor: Position { row: 0, col: 0 },
            viewport: Viewport {
                top: 0,
                left: 0,
                height: 10, // Updated from the render area
            },
            focused: false,
            supported_actions: vec![
                Action::MoveUp,
                Action::MoveDown,
                Action::MoveLeft,
                Action::MoveRight,
                Action::PageUp,
                Action::PageDown,
                Action::Home,
                Action::End,
                Action::GoToTop,
                Action::GoToBottom,
            ],
        }
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    fn row_count(&self) -> usize {
        self.dataset.row_count()
    }

    fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// Ensure cursor is within viewport
    fn ensure_cursor_visible(&mut self) {
        let height = self.viewport.height.max(1);
        if self.cursor.row < self.viewport.top {
            self.viewport.top = self.cursor.row;
        } else if self.cursor.row >= self.viewport.top + height {
            self.viewport.top = self.cursor.row + 1 - height;
        }
        // Horizontal scrolling keeps the cursor column first once it moves left of view
        if self.cursor.col < self.viewport.left {
            self.viewport.left = self.cursor.col;
        }
    }

    fn move_rows(&mut self, delta: isize) {
        let rows = self.row_count();
        if rows == 0 {
            return;
        }
        let target = self.cursor.row as isize + delta;
        self.cursor.row = target.clamp(0, rows as isize - 1) as usize;
        self.ensure_cursor_visible();
    }

    fn set_col(&mut self, col: usize) {
        let cols = self.column_count();
        if cols == 0 {
            return;
        }
        self.cursor.col = col.min(cols - 1);
        self.ensure_cursor_visible();
    }

    /// Width (in cells) a column wants, from its header and the visible values
    fn column_width(&self, col: usize) -> usize {
        let header = self.column_names[col].chars().count();
        let end = (self.viewport.top + self.viewport.height).min(self.row_count());
        let widest = (self.viewport.top..end)
            .filter_map(|r| self.dataset.cell_text_at(r, col))
            .map(|v| v.chars().count())
            .max()
            .unwrap_or(0);
        header.max(widest).clamp(MIN_COL_WIDTH, MAX_COL_WIDTH)
    }

    /// Columns that fit from `viewport.left`, scrolling right first if the cursor would be cut off
    fn visible_columns(&mut self, available: usize) -> Vec<(usize, usize)> {
        loop {
            let mut used = 0;
            let mut cols = Vec::new();
            for col in self.viewport.left..self.column_count() {
                let w = self.column_width(col);
                if !cols.is_empty() && used + w + 1 > available {
                    break;
                }
                used += w + 1;
                cols.push((col, w));
            }
            let cursor_shown = cols.iter().any(|(c, _)| *c == self.cursor.col);
            if cursor_shown || self.viewport.left >= self.cursor.col {
                return cols;
            }
            self.viewport.left += 1;
        }
    }
}

impl Component for DataPreview {
    fn handle_action(&mut self, action: Action) -> Result<bool> {
        let page = self.viewport.height.max(1) as isize;
        match action {
            Action::MoveUp => self.move_rows(-1),
            Action::MoveDown => self.move_rows(1),
            Action::PageUp => self.move_rows(-page),
            Action::PageDown => self.move_rows(page),
            Action::GoToTop => self.move_rows(-(self.row_count() as isize)),
            Action::GoToBottom => self.move_rows(self.row_count() as isize),
            Action::MoveLeft => self.set_col(self.cursor.col.saturating_sub(1)),
            Action::MoveRight => self.set_col(self.cursor.col + 1),
            Action::Home => self.set_col(0),
            Action::End => self.set_col(self.column_count().saturating_sub(1)),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Account for borders and header
        self.viewport.height = area.height.saturating_sub(3) as usize;
        self.ensure_cursor_visible();

        let theme = Theme::default();
        let visible = self.visible_columns(area.width.saturating_sub(2) as usize);

        let header = Row::new(
            visible
                .iter()
                .map(|(c, _)| Cell::from(self.column_names[*c].as_str()))
                .collect::<Vec<_>>(),
        )
        .style(theme.header_style());

        let end = (self.viewport.top + self.viewport.height).min(self.row_count());
        let rows: Vec<Row> = (self.viewport.top..end)
            .map(|r| {
                let cells = visible.iter().map(|(c, _)| {
                    let text = self.dataset.cell_text_at(r, *c).unwrap_or_default();
                    let cell = Cell::from(text);
                    if r == self.cursor.row && *c == self.cursor.col && self.focused {
                        cell.style(theme.selected_style())
                    } else {
                        cell
                    }
                });
                let style = if r == self.cursor.row {
                    theme.header_style()
                } else if (r - self.viewport.top) % 2 == 1 {
                    theme.alt_row_style()
                } else {
                    theme.normal_style()
                };
                Row::new(cells.collect::<Vec<_>>()).style(style)
            })
            .collect();

        let widths: Vec<Constraint> = visible
            .iter()
            .map(|(_, w)| Constraint::Length(*w as u16))
            .collect();

        let table = Table::new(rows, widths).header(header).block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "{DATA_PREVIEW_TITLE} [{}/{}]",
                    (self.cursor.row + 1).min(self.row_count()),
                    self.row_count()
                ))
                .border_style(theme.border_for(self.focused)),
        );

        frame.render_widget(table, area);
    }

    fn supported_actions(&self) -> &[Action] {
        &self.supported_actions
    }

    fn name(&self) -> &str {
        "DataPreview"
    }
}

impl Focusable for DataPreview {
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
    use ratatui::{backend::TestBackend, Terminal};

    fn create_test_dataset() -> Dataset {
        Dataset::from_csv_bytes(
            b"file_attachment_id,assign_class,prediction\n\
              A1,nevus,benign\n\
              B2,melanoma,malignant\n\
              C3,acne,benign\n"
                .to_vec(),
        )
        .unwrap()
    }

    #[test]
    fn test_cursor_movement() {
        let mut table = DataPreview::new(create_test_dataset());
        assert_eq!(table.cursor(), Position { row: 0, col: 0 });

        table.handle_action(Action::MoveDown).unwrap();
        assert_eq!(table.cursor().row, 1);
        table.handle_action(Action::MoveRight).unwrap();
        assert_eq!(table.cursor().col, 1);
        table.handle_action(Action::MoveUp).unwrap();
        assert_eq!(table.cursor().row, 0);
        table.handle_action(Action::MoveLeft).unwrap();
        assert_eq!(table.cursor().col, 0);
    }

    #[test]
    fn test_go_to_top_bottom_and_home_end() {
        let mut table = DataPreview::new(create_test_dataset());

        table.handle_action(Action::GoToBottom).unwrap();
        assert_eq!(table.cursor().row, 2);
        table.handle_action(Action::GoToTop).unwrap();
        assert_eq!(table.cursor().row, 0);

        table.handle_action(Action::End).unwrap();
        assert_eq!(table.cursor().col, 2);
        table.handle_action(Action::Home).unwrap();
        assert_eq!(table.cursor().col, 0);

        assert!(!table.handle_action(Action::Toggle).unwrap());
    }

    #[test]
    fn test_render_shows_header_and_values() {
        let mut table = DataPreview::new(create_test_dataset());
        let mut terminal = Terminal::new(TestBackend::new(80, 8)).unwrap();
        terminal.draw(|f| table.render(f, f.area())).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Data Preview [1/3]"));
        assert!(text.contains("file_attachment_id"));
        assert!(text.contains("melanoma"));
    }

    #[test]
    fn test_narrow_area_scrolls_to_cursor_column() {
        let mut table = DataPreview::new(create_test_dataset());
        let mut terminal = Terminal::new(TestBackend::new(24, 8)).unwrap();
        table.handle_action(Action::End).unwrap();
        terminal.draw(|f| table.render(f, f.area())).unwrap();
        assert!(table.viewport.left > 0);
    }
}
