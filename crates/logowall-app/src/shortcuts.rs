//! Keyboard shortcut registry and key mapping.

use winit::keyboard::{Key, NamedKey};

use crate::ui::{UiAction, UiState};

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub shift: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, shift: bool, description: &'static str) -> Self {
        Self {
            key,
            shift,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Shift+/").
    pub fn format(&self) -> String {
        if self.shift {
            format!("Shift+{}", self.key)
        } else {
            self.key.to_string()
        }
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("D", false, "Toggle direction"),
            Shortcut::new("P", false, "Toggle pause on hover"),
            Shortcut::new("?", false, "Show shortcuts"),
            Shortcut::new("Escape", false, "Close shortcuts, or quit"),
        ]
    }
}

/// Map a pressed key to its action.
pub fn action_for_key(key: &Key, ui_state: &UiState) -> Option<UiAction> {
    match key {
        Key::Named(NamedKey::Escape) if ui_state.shortcuts_open => Some(UiAction::CloseShortcuts),
        Key::Named(NamedKey::Escape) => Some(UiAction::Quit),
        Key::Character(c) => match c.as_str() {
            "d" | "D" => Some(UiAction::ToggleDirection),
            "p" | "P" => Some(UiAction::TogglePauseOnHover),
            "?" => Some(UiAction::ToggleShortcuts),
            _ => None,
        },
        _ => None,
    }
}
