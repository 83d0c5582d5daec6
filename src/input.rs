//! Maps raw terminal key events to game inputs for the current phase.

use crate::core::session::{GameInput, GamePhase};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translate a key press into a game input, or `None` if the key means
/// nothing in this phase.
///
/// - Space: begin (Start), flap (Playing), restart (GameOver)
/// - R: restart (GameOver)
/// - Q: quit from anywhere
/// - Esc / Ctrl-C: close signal, also quits
pub fn map_key(key: KeyEvent, phase: GamePhase) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(GameInput::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(GameInput::Quit),
        KeyCode::Char(' ') => Some(match phase {
            GamePhase::Start => GameInput::Begin,
            GamePhase::Playing => GameInput::Flap,
            GamePhase::GameOver => GameInput::Restart,
        }),
        KeyCode::Char('r') | KeyCode::Char('R') if phase == GamePhase::GameOver => {
            Some(GameInput::Restart)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_depends_on_phase() {
        let space = press(KeyCode::Char(' '));
        assert_eq!(map_key(space, GamePhase::Start), Some(GameInput::Begin));
        assert_eq!(map_key(space, GamePhase::Playing), Some(GameInput::Flap));
        assert_eq!(map_key(space, GamePhase::GameOver), Some(GameInput::Restart));
    }

    #[test]
    fn test_r_only_restarts_after_game_over() {
        let r = press(KeyCode::Char('r'));
        assert_eq!(map_key(r, GamePhase::GameOver), Some(GameInput::Restart));
        assert_eq!(map_key(r, GamePhase::Playing), None);
        assert_eq!(map_key(r, GamePhase::Start), None);
    }

    #[test]
    fn test_quit_keys_in_every_phase() {
        for phase in [GamePhase::Start, GamePhase::Playing, GamePhase::GameOver] {
            assert_eq!(map_key(press(KeyCode::Char('q')), phase), Some(GameInput::Quit));
            assert_eq!(map_key(press(KeyCode::Esc), phase), Some(GameInput::Quit));
            let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(map_key(ctrl_c, phase), Some(GameInput::Quit));
        }
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release, GamePhase::Playing), None);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(map_key(press(KeyCode::Enter), GamePhase::Start), None);
        assert_eq!(map_key(press(KeyCode::Up), GamePhase::Playing), None);
        assert_eq!(map_key(press(KeyCode::Char('x')), GamePhase::GameOver), None);
    }
}
