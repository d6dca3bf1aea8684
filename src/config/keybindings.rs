//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Only code and modifiers take part in the lookup.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<(KeyCode, KeyModifiers), KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event. Releases never match.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        self.bindings.get(&(key.code, key.modifiers)).copied()
    }

    /// Bind `code` with `modifiers` to `action`, replacing any previous
    /// binding.
    pub fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert((code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        keys.bind(KeyCode::Char('j'), none, KeyAction::Down);
        keys.bind(KeyCode::Down, none, KeyAction::Down);
        keys.bind(KeyCode::Char('k'), none, KeyAction::Up);
        keys.bind(KeyCode::Up, none, KeyAction::Up);

        keys.bind(KeyCode::Char('g'), none, KeyAction::First);
        keys.bind(KeyCode::Home, none, KeyAction::First);
        // terminals disagree on whether uppercase carries SHIFT
        keys.bind(KeyCode::Char('G'), KeyModifiers::SHIFT, KeyAction::Last);
        keys.bind(KeyCode::Char('G'), none, KeyAction::Last);
        keys.bind(KeyCode::End, none, KeyAction::Last);

        keys.bind(KeyCode::Char('d'), KeyModifiers::CONTROL, KeyAction::DetailsPageDown);
        keys.bind(KeyCode::PageDown, none, KeyAction::DetailsPageDown);
        keys.bind(KeyCode::Char('u'), KeyModifiers::CONTROL, KeyAction::DetailsPageUp);
        keys.bind(KeyCode::PageUp, none, KeyAction::DetailsPageUp);

        keys.bind(KeyCode::Char('m'), none, KeyAction::ToggleMenu);
        keys.bind(KeyCode::Enter, none, KeyAction::Activate);
        keys.bind(KeyCode::Esc, none, KeyAction::Cancel);

        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn vim_and_arrow_keys_move() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.get(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(KeyAction::Down)
        );
        assert_eq!(
            keys.get(key(KeyCode::Down, KeyModifiers::NONE)),
            Some(KeyAction::Down)
        );
        assert_eq!(
            keys.get(key(KeyCode::Char('k'), KeyModifiers::NONE)),
            Some(KeyAction::Up)
        );
        assert_eq!(
            keys.get(key(KeyCode::Up, KeyModifiers::NONE)),
            Some(KeyAction::Up)
        );
    }

    #[test]
    fn capital_g_works_with_or_without_shift() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.get(key(KeyCode::Char('G'), KeyModifiers::SHIFT)),
            Some(KeyAction::Last)
        );
        assert_eq!(
            keys.get(key(KeyCode::Char('G'), KeyModifiers::NONE)),
            Some(KeyAction::Last)
        );
    }

    #[test]
    fn ctrl_c_and_q_quit() {
        let keys = KeyBindings::default();
        assert_eq!(
            keys.get(key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(KeyAction::Quit)
        );
        assert_eq!(
            keys.get(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyAction::Quit)
        );
        assert_eq!(keys.get(key(KeyCode::Char('c'), KeyModifiers::NONE)), None);
    }

    #[test]
    fn releases_are_ignored() {
        let keys = KeyBindings::default();
        let mut release = key(KeyCode::Char('j'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(keys.get(release), None);
    }

    #[test]
    fn bind_replaces_existing() {
        let mut keys = KeyBindings::default();
        keys.bind(KeyCode::Char('j'), KeyModifiers::NONE, KeyAction::Quit);
        assert_eq!(
            keys.get(key(KeyCode::Char('j'), KeyModifiers::NONE)),
            Some(KeyAction::Quit)
        );
    }
}
