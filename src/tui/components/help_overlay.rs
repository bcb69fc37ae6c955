use crate::tui::{Action, ActionCategory, Component, KeyBindings, Theme};
use color_eyre::Result;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Key reference drawn over the dashboard
pub struct HelpOverlay {
    lines: Vec<(ActionCategory, Vec<(String, &'static str)>)>,
    scroll: u16,
    supported_actions: Vec<Action>,
}

impl HelpOverlay {
    pub fn new(keybindings: &KeyBindings) -> Self {
        let lines: Vec<_> = ActionCategory::all()
            .into_iter()
            .map(|category| {
                let entries: Vec<(String, &'static str)> = Action::all()
                    .into_iter()
                    .filter(|a| a.category() == category)
                    .filter_map(|a| {
                        let keys = keybindings.get_keys_for_action(a);
                        (!keys.is_empty()).then(|| (keys.join(", "), a.description()))
                    })
                    .collect();
                (category, entries)
            })
            .collect();

        Self {
            lines,
            scroll: 0,
            supported_actions: vec![Action::MoveUp, Action::MoveDown],
        }
    }

    /// Flattened "keys - description" rows, grouped under category headings
    pub fn entries(&self) -> Vec<String> {
        self.lines
            .iter()
            .flat_map(|(category, entries)| {
                std::iter::once(category.to_string())
                    .chain(entries.iter().map(|(keys, desc)| format!("{keys} - {desc}")))
            })
            .collect()
    }
}

impl Component for HelpOverlay {
    fn handle_action(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::MoveDown => self.scroll = self.scroll.saturating_add(1),
            Action::MoveUp => self.scroll = self.scroll.saturating_sub(1),
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let theme = Theme::default();
        let mut text = Vec::new();
        for (category, entries) in &self.lines {
            if entries.is_empty() {
                continue;
            }
            text.push(Line::from(Span::styled(
                category.to_string(),
                theme.header_style(),
            )));
            for (keys, desc) in entries {
                text.push(Line::from(vec![
                    Span::styled(format!("  {keys:<18}"), theme.label_style()),
                    Span::raw(*desc),
                ]));
            }
            text.push(Line::default());
        }

        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Help (? to close)")
                        .border_style(theme.focused_border_style()),
                )
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0)),
            area,
        );
    }

    fn supported_actions(&self) -> &[Action] {
        &self.supported_actions
    }

    fn name(&self) -> &str {
        "HelpOverlay"
    }
}
