use ratatui::style::{Color, Modifier, Style};

/// Palette for the dashboard. Widgets ask for styles by role, never raw colors.
#[derive(Debug, Clone)]
pub struct Theme {
    pub text: Color,
    pub dim: Color,
    pub accent: Color,
    pub on_accent: Color,
    pub stripe: Color,
    pub title: Color,
    pub label: Color,
    pub ok: Color,
    pub warn: Color,
    pub err: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::Gray,
            dim: Color::DarkGray,
            accent: Color::Cyan,
            on_accent: Color::Black,
            stripe: Color::Rgb(25, 25, 35),
            title: Color::White,
            label: Color::Yellow,
            ok: Color::Green,
            warn: Color::Yellow,
            err: Color::Red,
        }
    }
}

impl Theme {
    fn bold(color: Color) -> Style {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn title_style(&self) -> Style {
        Self::bold(self.title)
    }

    /// Table header and the data preview's cursor row
    pub fn header_style(&self) -> Style {
        Self::bold(self.accent)
    }

    /// Highlighted entry in a focused list or table
    pub fn selected_style(&self) -> Style {
        Self::bold(self.on_accent).bg(self.accent)
    }

    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn alt_row_style(&self) -> Style {
        self.normal_style().bg(self.stripe)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn focused_border_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn border_for(&self, focused: bool) -> Style {
        if focused {
            self.focused_border_style()
        } else {
            self.border_style()
        }
    }

    /// Ticked columns and the committed row marker
    pub fn checked_style(&self) -> Style {
        Self::bold(self.ok)
    }

    /// Field label in the metadata panels
    pub fn label_style(&self) -> Style {
        Self::bold(self.label)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.dim).add_modifier(Modifier::ITALIC)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.err)
    }

    pub fn warning_style(&self) -> Style {
        Style::default().fg(self.warn)
    }
}
