//! Keyboard input mapping — key events to panel actions.
//!
//! Anything not listed here maps to `None` and is silently dropped; the
//! panel itself never sees raw key codes.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use rangepanel_core::Action;

/// Resolve one key event to an action, if it maps to one.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),

        KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Right),

        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Confirm),
        KeyCode::Tab => Some(Action::NextTarget),

        _ => None,
    }
}

/// Key bindings for the panel footer.
pub fn key_bindings_help() -> Vec<(&'static str, &'static str)> {
    vec![
        ("↑/k ↓/j", "select"),
        ("←/h →/l", "adjust"),
        ("Enter/Space", "toggle"),
        ("Tab", "switch handle"),
        ("q/Esc", "apply and quit"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    #[test]
    fn arrows_and_vim_keys_map_alike() {
        for (code, action) in [
            (KeyCode::Up, Action::Up),
            (KeyCode::Char('k'), Action::Up),
            (KeyCode::Down, Action::Down),
            (KeyCode::Char('j'), Action::Down),
            (KeyCode::Left, Action::Left),
            (KeyCode::Char('h'), Action::Left),
            (KeyCode::Right, Action::Right),
            (KeyCode::Char('l'), Action::Right),
        ] {
            assert_eq!(map_key(KeyEvent::from(code)), Some(action));
        }
    }

    #[test]
    fn confirm_next_target_and_quit() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(Action::Confirm));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), Some(Action::Confirm));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Tab)), Some(Action::NextTarget));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Action::Quit));
    }

    #[test]
    fn ctrl_c_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(key), Some(Action::Quit));
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('z'))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::F(5))), None);
        assert_eq!(map_key(KeyEvent::from(KeyCode::Backspace)), None);
    }

    #[test]
    fn release_events_are_dropped() {
        let key = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(key), None);
    }

    #[test]
    fn help_covers_every_action_group() {
        let help = key_bindings_help();
        assert_eq!(help.len(), 5);
        assert_eq!(help[0].1, "select");
    }
}
