//! Key mapping from terminal events to craft controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key the craft reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKey {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

impl ControlKey {
    /// Direction contribution as `(rows, columns)`.
    pub fn direction(self) -> (i8, i8) {
        match self {
            ControlKey::Up => (-1, 0),
            ControlKey::Down => (1, 0),
            ControlKey::Left => (0, -1),
            ControlKey::Right => (0, 1),
            ControlKey::Fire => (0, 0),
        }
    }
}

/// Map a keyboard event to a control key.
pub fn map_key(key: KeyEvent) -> Option<ControlKey> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(ControlKey::Up)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(ControlKey::Down)
        }
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(ControlKey::Left)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(ControlKey::Right)
        }
        KeyCode::Char(' ') => Some(ControlKey::Fire),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
