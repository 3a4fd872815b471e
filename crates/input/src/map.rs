//! Key mapping from terminal events to game commands.

use crate::types::{Command, ReplayChoice};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a game command.
///
/// Unrecognized keys map to `None` and never reach the engine.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('j') | KeyCode::Char('J') => Some(Command::TurnLeft),
        KeyCode::Right | KeyCode::Char('k') | KeyCode::Char('K') => Some(Command::TurnRight),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a key pressed at the "play once more?" prompt.
pub fn replay_choice(key: KeyEvent) -> Option<ReplayChoice> {
    if should_quit(key) {
        return Some(ReplayChoice::No);
    }
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(ReplayChoice::Yes),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(ReplayChoice::No),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_turn_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('j'))),
            Some(Command::TurnLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('k'))),
            Some(Command::TurnRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Command::TurnLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Command::TurnRight)
        );
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('Q'))),
            Some(Command::Quit)
        );
    }

    #[test]
    fn test_replay_keys() {
        assert_eq!(
            replay_choice(KeyEvent::from(KeyCode::Char('y'))),
            Some(ReplayChoice::Yes)
        );
        assert_eq!(
            replay_choice(KeyEvent::from(KeyCode::Char('n'))),
            Some(ReplayChoice::No)
        );
        assert_eq!(
            replay_choice(KeyEvent::from(KeyCode::Char('q'))),
            Some(ReplayChoice::No)
        );
        assert_eq!(replay_choice(KeyEvent::from(KeyCode::Char('j'))), None);
    }
}
