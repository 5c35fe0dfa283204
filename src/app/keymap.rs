use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub profile: String,
    pub custom: Option<HashMap<String, String>>,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            profile: "default".to_string(),
            custom: None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct KeyMap {
    pub bindings: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(key(KeyCode::Down), Action::SelectNext);
        bindings.insert(key(KeyCode::Up), Action::SelectPrev);
        bindings.insert(key(KeyCode::Enter), Action::AcceptSelection);
        bindings.insert(key(KeyCode::Esc), Action::Dismiss);
        bindings.insert(key(KeyCode::Right), Action::AcceptInline);
        bindings.insert(ctrl('c'), Action::Quit);
        bindings.insert(ctrl('q'), Action::Quit);

        if config.profile == "emacs" {
            bindings.insert(ctrl('n'), Action::SelectNext);
            bindings.insert(ctrl('p'), Action::SelectPrev);
            bindings.insert(ctrl('g'), Action::Dismiss);
        }

        if let Some(custom) = &config.custom {
            for (spec, name) in custom {
                match (parse_key(spec), parse_action(name)) {
                    (Some(event), Some(action)) => {
                        bindings.insert(event, action);
                    }
                    _ => tracing::warn!(key = %spec, action = %name, "ignoring invalid key binding"),
                }
            }
        }

        Self { bindings }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        self.bindings
            .get(&KeyEvent::new(event.code, event.modifiers))
            .cloned()
    }
}

/// Parses bindings such as `"down"`, `"tab"` or `"ctrl-n"`.
pub fn parse_key(spec: &str) -> Option<KeyEvent> {
    let spec = spec.trim().to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = spec.as_str();

    loop {
        if let Some(r) = rest.strip_prefix("ctrl-") {
            modifiers |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt-") {
            modifiers |= KeyModifiers::ALT;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift-") {
            modifiers |= KeyModifiers::SHIFT;
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        other => {
            if let Some(n) = other.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                KeyCode::F(n)
            } else {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

pub fn parse_action(name: &str) -> Option<Action> {
    match name.trim() {
        "select_next" => Some(Action::SelectNext),
        "select_prev" => Some(Action::SelectPrev),
        "accept" => Some(Action::AcceptSelection),
        "accept_inline" => Some(Action::AcceptInline),
        "dismiss" => Some(Action::Dismiss),
        "quit" => Some(Action::Quit),
        _ => None,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
