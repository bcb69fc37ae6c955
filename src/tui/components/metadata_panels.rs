use crate::core::{MetadataLayout, MetadataPanel};
use crate::tui::{Action, Component, Theme};
use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// The two fixed metadata panels side by side, plus "Additional Information" below
pub struct MetadataPanels {
    layout: Option<MetadataLayout>,
    scroll: u16,
    supported_actions: Vec<Action>,
}

impl MetadataPanels {
    pub fn new() -> Self {
        Self {
            layout: None,
            scroll: 0,
            supported_actions: vec![Action::PageUp, Action::PageDown],
        }
    }

    pub fn set_layout(&mut self, layout: Option<MetadataLayout>) {
        self.layout = layout;
        self.scroll = 0;
    }

    pub fn layout(&self) -> Option<&MetadataLayout> {
        self.layout.as_ref()
    }

    /// Label line, wrapped value lines, blank separator; per entry
    fn panel_lines<'a>(panel: &'a MetadataPanel, theme: &Theme, wrap_width: usize) -> Vec<Line<'a>> {
        let mut lines = Vec::with_capacity(panel.entries.len() * 3);
        for entry in &panel.entries {
            lines.push(Line::from(Span::styled(entry.label.as_str(), theme.label_style())));
            lines.extend(
                textwrap::wrap(&entry.value, wrap_width)
                    .into_iter()
                    .map(Line::from),
            );
            lines.push(Line::default());
        }
        lines
    }

    fn render_panel(&self, frame: &mut Frame, area: Rect, panel: &MetadataPanel, theme: &Theme) {
        let wrap_width = area.width.saturating_sub(2).max(1) as usize;
        let paragraph = Paragraph::new(Self::panel_lines(panel, theme, wrap_width))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(panel.title, theme.title_style()))
                    .border_style(theme.border_style()),
            )
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

impl Default for MetadataPanels {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for MetadataPanels {
    fn handle_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::PageDown => self.scroll = self.scroll.saturating_add(5),
            Action::PageUp => self.scroll = self.scroll.saturating_sub(5),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = Theme::default();
        let Some(layout) = &self.layout else {
            return;
        };

        let (top, bottom) = if layout.additional.is_some() {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(area);
            (chunks[0], Some(chunks[1]))
        } else {
            (area, None)
        };

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(top);
        self.render_panel(frame, columns[0], &layout.model_prediction, &theme);
        self.render_panel(frame, columns[1], &layout.ground_truth, &theme);

        if let (Some(panel), Some(area)) = (&layout.additional, bottom) {
            self.render_panel(frame, area, panel, &theme);
        }
    }

    fn supported_actions(&self) -> &[Action] {
        &self.supported_actions
    }

    fn name(&self) -> &str {
        "MetadataPanels"
    }
}
