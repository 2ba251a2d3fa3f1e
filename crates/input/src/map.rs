//! Key and mouse mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::types::{Difficulty, GameAction};

/// Map a key press to a game action.
///
/// Unmapped keys return `None`; the session still treats them as "any
/// input" where that matters (dismissing the game-over screen).
pub fn map_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Difficulty selection (start screen).
        KeyCode::Char('1') => Some(GameAction::Select(Difficulty::Easy)),
        KeyCode::Char('2') => Some(GameAction::Select(Difficulty::Medium)),
        KeyCode::Char('3') => Some(GameAction::Select(Difficulty::Hard)),

        // Flap.
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => Some(GameAction::Flap),

        // Display toggles, valid in any phase.
        KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::SetDarkTheme(true)),
        KeyCode::Char('l') | KeyCode::Char('L') => Some(GameAction::SetDarkTheme(false)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::ToggleRain),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(GameAction::ToggleFog),

        _ => None,
    }
}

/// Map a mouse event to a game action. Any button press flaps; the primary
/// and secondary buttons behave identically to a key press.
pub fn map_mouse_event(mouse: MouseEvent) -> Option<GameAction> {
    match mouse.kind {
        MouseEventKind::Down(_) => Some(GameAction::Flap),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
