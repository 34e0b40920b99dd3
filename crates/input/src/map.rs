//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Arrows and WASD answer; the rest drive the menus. Anything else is ignored.
/// Auto-repeat only produces answers (the game's debounce gate paces them);
/// releases produce nothing.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    let action = map_key_code(key.code)?;
    match key.kind {
        KeyEventKind::Press => Some(action),
        KeyEventKind::Repeat => matches!(action, GameAction::Input(_)).then_some(action),
        KeyEventKind::Release => None,
    }
}

fn map_key_code(code: KeyCode) -> Option<GameAction> {
    match code {
        // Answers
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::Input(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::Input(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::Input(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::Input(Direction::Right))
        }

        // Menus
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::Start),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(GameAction::Tutorial),
        KeyCode::Tab => Some(GameAction::SkipTutorial),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::Menu),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    key.kind == KeyEventKind::Press
        && (matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key_with_kind(code: KeyCode, kind: KeyEventKind) -> Option<GameAction> {
        handle_key_event(KeyEvent::new_with_kind_and_state(
            code,
            KeyModifiers::NONE,
            kind,
            KeyEventState::NONE,
        ))
    }

    fn key(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key(KeyCode::Up), Some(GameAction::Input(Direction::Up)));
        assert_eq!(key(KeyCode::Down), Some(GameAction::Input(Direction::Down)));
        assert_eq!(key(KeyCode::Left), Some(GameAction::Input(Direction::Left)));
        assert_eq!(
            key(KeyCode::Right),
            Some(GameAction::Input(Direction::Right))
        );
    }

    #[test]
    fn test_wasd_keys_either_case() {
        for (lower, upper, dir) in [
            ('w', 'W', Direction::Up),
            ('s', 'S', Direction::Down),
            ('a', 'A', Direction::Left),
            ('d', 'D', Direction::Right),
        ] {
            assert_eq!(key(KeyCode::Char(lower)), Some(GameAction::Input(dir)));
            assert_eq!(key(KeyCode::Char(upper)), Some(GameAction::Input(dir)));
        }
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(key(KeyCode::Enter), Some(GameAction::Start));
        assert_eq!(key(KeyCode::Char(' ')), Some(GameAction::Start));
        assert_eq!(key(KeyCode::Char('t')), Some(GameAction::Tutorial));
        assert_eq!(key(KeyCode::Tab), Some(GameAction::SkipTutorial));
        assert_eq!(key(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(key(KeyCode::Esc), Some(GameAction::Menu));
        assert_eq!(key(KeyCode::Char('m')), Some(GameAction::Menu));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(key(KeyCode::Char('x')), None);
        assert_eq!(key(KeyCode::F(5)), None);
        assert_eq!(key(KeyCode::Home), None);
    }

    #[test]
    fn test_control_chords_do_not_answer() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_auto_repeat_only_answers() {
        assert_eq!(
            key_with_kind(KeyCode::Left, KeyEventKind::Repeat),
            Some(GameAction::Input(Direction::Left))
        );
        assert_eq!(
            key_with_kind(KeyCode::Char('w'), KeyEventKind::Repeat),
            Some(GameAction::Input(Direction::Up))
        );
        assert_eq!(key_with_kind(KeyCode::Enter, KeyEventKind::Repeat), None);
        assert_eq!(key_with_kind(KeyCode::Char('r'), KeyEventKind::Repeat), None);
        assert_eq!(key_with_kind(KeyCode::Esc, KeyEventKind::Repeat), None);
    }

    #[test]
    fn test_releases_are_ignored() {
        assert_eq!(key_with_kind(KeyCode::Up, KeyEventKind::Release), None);
        assert_eq!(key_with_kind(KeyCode::Enter, KeyEventKind::Release), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release
        )));
    }
}
