//! Keyboard mapping and cursor movement.

use crossterm::event::KeyCode;
use tictac_rules::Position;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the cursor with an arrow key.
    Cursor(KeyCode),
    /// Play at the cursor.
    PlayCursor,
    /// Play at a numbered square.
    PlayAt(Position),
    /// Start a new game.
    NewGame,
    /// Show a hint.
    Hint,
    /// Zero the scoreboard.
    ResetScores,
    /// Switch light/dark.
    ToggleTheme,
    /// Switch emoji/letter marks.
    ToggleEmojis,
    /// Switch player-vs-player/player-vs-computer.
    ToggleMode,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action. Unbound keys map to `None`.
pub fn key_action(key: KeyCode) -> Option<KeyAction> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(KeyAction::Cursor(key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(KeyAction::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => {
            Position::from_label_or_key(&c.to_string()).map(KeyAction::PlayAt)
        }
        KeyCode::Char('n') => Some(KeyAction::NewGame),
        KeyCode::Char('h') => Some(KeyAction::Hint),
        KeyCode::Char('r') => Some(KeyAction::ResetScores),
        KeyCode::Char('t') => Some(KeyAction::ToggleTheme),
        KeyCode::Char('e') => Some(KeyAction::ToggleEmojis),
        KeyCode::Char('m') => Some(KeyAction::ToggleMode),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Left), Position::BottomCenter);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::MiddleRight, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_digit_keys_are_one_based() {
        assert_eq!(
            key_action(KeyCode::Char('1')),
            Some(KeyAction::PlayAt(Position::TopLeft))
        );
        assert_eq!(
            key_action(KeyCode::Char('9')),
            Some(KeyAction::PlayAt(Position::BottomRight))
        );
        assert_eq!(key_action(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(key_action(KeyCode::Char('n')), Some(KeyAction::NewGame));
        assert_eq!(key_action(KeyCode::Char('m')), Some(KeyAction::ToggleMode));
        assert_eq!(key_action(KeyCode::Esc), Some(KeyAction::Quit));
        assert_eq!(key_action(KeyCode::Char('z')), None);
    }
}
