use crate::tui::action::Action;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

const DEFAULT_BINDINGS: &[(&str, Action)] = &[
    ("Up", Action::MoveUp),
    ("k", Action::MoveUp),
    ("Down", Action::MoveDown),
    ("j", Action::MoveDown),
    ("Left", Action::MoveLeft),
    ("h", Action::MoveLeft),
    ("Right", Action::MoveRight),
    ("l", Action::MoveRight),
    ("PageUp", Action::PageUp),
    ("Ctrl+u", Action::PageUp),
    ("PageDown", Action::PageDown),
    ("Ctrl+d", Action::PageDown),
    ("Home", Action::Home),
    ("End", Action::End),
    ("g", Action::GoToTop),
    ("G", Action::GoToBottom),
    ("Space", Action::Toggle),
    ("Enter", Action::Confirm),
    ("Tab", Action::FocusNext),
    ("BackTab", Action::FocusPrev),
    ("?", Action::ToggleHelp),
    ("F1", Action::ToggleHelp),
    ("r", Action::Refresh),
    ("F5", Action::Refresh),
    ("Esc", Action::Cancel),
    ("q", Action::Quit),
    ("Ctrl+c", Action::Quit),
];

const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("up", KeyCode::Up),
    ("down", KeyCode::Down),
    ("left", KeyCode::Left),
    ("right", KeyCode::Right),
    ("pageup", KeyCode::PageUp),
    ("pagedown", KeyCode::PageDown),
    ("home", KeyCode::Home),
    ("end", KeyCode::End),
    ("tab", KeyCode::Tab),
    ("backtab", KeyCode::BackTab),
    ("enter", KeyCode::Enter),
    ("esc", KeyCode::Esc),
    ("backspace", KeyCode::Backspace),
    ("delete", KeyCode::Delete),
    ("space", KeyCode::Char(' ')),
];

/// Key-to-action table for the dashboard
///
/// Serialized as `{ "bindings": [{ "key": "Ctrl+d", "action": "PageDown" }, ...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBindings {
    #[serde(rename = "bindings")]
    bindings_list: Vec<KeyBinding>,

    #[serde(skip)]
    bindings_map: HashMap<KeyPattern, Action>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    pub key: String,
    pub action: Action,
}

/// A key plus modifiers, normalized so it compares equal to what the terminal reports.
///
/// Shift is dropped for characters and BackTab: the character itself already
/// says `G` or `?`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_list(
            DEFAULT_BINDINGS
                .iter()
                .map(|(key, action)| KeyBinding::new(key, *action))
                .collect(),
        )
    }
}

impl KeyBindings {
    pub fn from_list(bindings_list: Vec<KeyBinding>) -> Self {
        let bindings_map = bindings_list
            .iter()
            .filter_map(|b| b.key.parse().ok().map(|p| (p, b.action)))
            .collect();
        Self {
            bindings_list,
            bindings_map,
        }
    }

    pub fn get_action(&self, key: &KeyEvent) -> Option<Action> {
        self.bindings_map.get(&KeyPattern::from_event(key)).copied()
    }

    /// Read a bindings file and lay it over the defaults.
    ///
    /// Every action named in the file loses its default keys; actions the file
    /// does not mention keep them.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let user: KeyBindings = serde_json::from_str(&content)?;
        Ok(Self::default().overlay(user.bindings_list))
    }

    fn overlay(self, user: Vec<KeyBinding>) -> Self {
        let overridden: HashSet<Action> = user.iter().map(|b| b.action).collect();
        let merged = self
            .bindings_list
            .into_iter()
            .filter(|b| !overridden.contains(&b.action))
            .chain(user)
            .collect();
        Self::from_list(merged)
    }

    /// Key names bound to `action`, in table order
    pub fn get_keys_for_action(&self, action: Action) -> Vec<String> {
        self.bindings_list
            .iter()
            .filter(|b| b.action == action)
            .map(|b| b.key.clone())
            .collect()
    }

    /// Problems worth logging: unparsable keys, keys bound twice, unreachable actions
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        let mut owner: HashMap<KeyPattern, (&str, Action)> = HashMap::new();

        for b in &self.bindings_list {
            let pattern = match b.key.parse::<KeyPattern>() {
                Ok(p) => p,
                Err(e) => {
                    warnings.push(format!("{e} (bound to {:?})", b.action));
                    continue;
                }
            };
            if let Some((first_key, first_action)) = owner.get(&pattern) {
                warnings.push(format!(
                    "'{}' clashes with '{first_key}': {:?} vs {first_action:?}",
                    b.key, b.action
                ));
            } else {
                owner.insert(pattern, (b.key.as_str(), b.action));
            }
        }

        let reachable: HashSet<Action> = owner.values().map(|(_, a)| *a).collect();
        for action in Action::all() {
            if !reachable.contains(&action) {
                warnings.push(format!("{action:?} has no key"));
            }
        }
        warnings
    }
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
        }
    }
}

impl KeyPattern {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let mut modifiers = modifiers;
        if matches!(code, KeyCode::Char(_) | KeyCode::BackTab) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        Self { code, modifiers }
    }

    pub fn from_event(event: &KeyEvent) -> Self {
        Self::new(event.code, event.modifiers)
    }
}

/// Accepts "Ctrl+c", "Alt+Enter", "G", "F5", "Space" and a lone "+"
impl FromStr for KeyPattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mods, key) = match s.rsplit_once('+') {
            Some((mods, "")) if !mods.is_empty() => (Some(mods.trim_end_matches('+')), "+"),
            Some(("", _)) | None => (None, s),
            Some((mods, key)) => (Some(mods), key),
        };

        let mut modifiers = KeyModifiers::NONE;
        for m in mods.into_iter().flat_map(|m| m.split('+')) {
            modifiers |= match m.to_ascii_lowercase().as_str() {
                "ctrl" => KeyModifiers::CONTROL,
                "alt" => KeyModifiers::ALT,
                "shift" => KeyModifiers::SHIFT,
                _ => return Err(format!("Unknown modifier '{m}' in '{s}'")),
            };
        }

        let lower = key.to_ascii_lowercase();
        let code = if key.chars().count() == 1 {
            key.chars().next().map(KeyCode::Char)
        } else if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            (1..=12).contains(&n).then_some(KeyCode::F(n))
        } else {
            NAMED_KEYS
                .iter()
                .find(|(name, _)| *name == lower)
                .map(|(_, code)| *code)
        };

        code.map(|code| Self::new(code, modifiers))
            .ok_or_else(|| format!("Unknown key '{key}' in '{s}'"))
    }
}

impl fmt::Display for KeyPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (flag, name) in [
            (KeyModifiers::CONTROL, "Ctrl+"),
            (KeyModifiers::ALT, "Alt+"),
            (KeyModifiers::SHIFT, "Shift+"),
        ] {
            if self.modifiers.contains(flag) {
                f.write_str(name)?;
            }
        }
        match self.code {
            KeyCode::Char(' ') => f.write_str("Space"),
            KeyCode::Char(c) => write!(f, "{c}"),
            KeyCode::F(n) => write!(f, "F{n}"),
            code => match NAMED_KEYS.iter().find(|(_, c)| *c == code) {
                Some((name, _)) => {
                    let mut chars = name.chars();
                    let first = chars.next().map(|c| c.to_ascii_uppercase());
                    write!(f, "{}{}", first.unwrap_or_default(), chars.as_str())
                }
                None => write!(f, "{code:?}"),
            },
        }
    }
}
