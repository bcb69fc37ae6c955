use serde::{Deserialize, Serialize};
use std::fmt;

/// What a key press asks the dashboard to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    PageUp,
    PageDown,
    Home,
    End,
    GoToTop,
    GoToBottom,

    // Selection
    Toggle,
    Confirm,

    // Focus
    FocusNext,
    FocusPrev,

    // View
    ToggleHelp,
    Refresh,
    Cancel,

    // Application
    Quit,
}

impl Action {
    /// One-line text for the help overlay
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move cursor up",
            Action::MoveDown => "Move cursor down",
            Action::MoveLeft => "Scroll table left",
            Action::MoveRight => "Scroll table right",
            Action::PageUp => "Page up",
            Action::PageDown => "Page down",
            Action::Home => "First column",
            Action::End => "Last column",
            Action::GoToTop => "Go to first entry",
            Action::GoToBottom => "Go to last entry",
            Action::Toggle => "Toggle highlighted column",
            Action::Confirm => "Choose highlighted entry",
            Action::FocusNext => "Focus next widget",
            Action::FocusPrev => "Focus previous widget",
            Action::ToggleHelp => "Toggle help screen",
            Action::Refresh => "Reload dataset",
            Action::Cancel => "Dismiss message",
            Action::Quit => "Quit application",
        }
    }

    /// Help overlay section
    pub fn category(&self) -> ActionCategory {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::MoveLeft
            | Action::MoveRight
            | Action::PageUp
            | Action::PageDown
            | Action::Home
            | Action::End
            | Action::GoToTop
            | Action::GoToBottom => ActionCategory::Navigation,

            Action::Toggle | Action::Confirm => ActionCategory::Selection,

            Action::FocusNext | Action::FocusPrev => ActionCategory::Focus,

            Action::ToggleHelp | Action::Refresh | Action::Cancel => ActionCategory::View,

            Action::Quit => ActionCategory::Application,
        }
    }

    /// Every action, in help-screen order
    pub fn all() -> [Action; 18] {
        use Action::*;
        [
            MoveUp, MoveDown, MoveLeft, MoveRight, PageUp, PageDown, Home, End, GoToTop,
            GoToBottom, Toggle, Confirm, FocusNext, FocusPrev, ToggleHelp, Refresh, Cancel, Quit,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    Navigation,
    Selection,
    Focus,
    View,
    Application,
}

impl ActionCategory {
    pub fn all() -> [ActionCategory; 5] {
        [
            ActionCategory::Navigation,
            ActionCategory::Selection,
            ActionCategory::Focus,
            ActionCategory::View,
            ActionCategory::Application,
        ]
    }
}

impl fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
