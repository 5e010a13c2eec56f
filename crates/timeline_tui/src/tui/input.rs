//! Key handling: cursor movement and key-to-command mapping.

use crossterm::event::{KeyCode, KeyEvent};
use timeline_tictactoe::{Intent, Position};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The board grid.
    #[default]
    Board,
    /// The move list.
    History,
}

impl Focus {
    /// The other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::History,
            Self::History => Self::Board,
        }
    }
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the program.
    Quit,
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Move the board cursor here.
    Cursor(Position),
    /// Move the move-list highlight up (`-1`) or down (`+1`).
    Scroll(isize),
    /// Act on the highlighted board cell or history entry.
    Select,
    /// Send an intent straight to the session.
    Dispatch(Intent),
    /// Nothing to do.
    Ignore,
}

/// Moves the board cursor one cell, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, col + 1),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => (row + 1, col),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key press to a command for the panel in `focus`.
///
/// Digits 1-9 always play the matching cell and `s` always toggles the
/// move-list order, whichever panel has focus.
pub fn command_for(key: KeyEvent, focus: Focus, cursor: Position) -> Command {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        KeyCode::Tab | KeyCode::BackTab => Command::SwitchFocus,
        KeyCode::Char('s') => Command::Dispatch(Intent::ToggleSort),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Intent::move_at_index(d as usize - 1))
            .map_or(Command::Ignore, Command::Dispatch),
        KeyCode::Enter | KeyCode::Char(' ') => Command::Select,
        code @ (KeyCode::Up | KeyCode::Down) if focus == Focus::History => {
            Command::Scroll(if code == KeyCode::Up { -1 } else { 1 })
        }
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Command::Cursor(move_cursor(cursor, code))
        }
        _ => Command::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Up),
            Position::TopCenter
        );
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Left),
            Position::MiddleLeft
        );
        assert_eq!(
            move_cursor(Position::TopCenter, KeyCode::Right),
            Position::TopRight
        );
        assert_eq!(
            move_cursor(Position::MiddleRight, KeyCode::Down),
            Position::BottomRight
        );
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Up),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Left),
            Position::TopLeft
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Right),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
    }

    #[test]
    fn test_digits_play_cells() {
        assert_eq!(
            command_for(key(KeyCode::Char('1')), Focus::Board, Position::Center),
            Command::Dispatch(Intent::MoveAt(Position::TopLeft))
        );
        assert_eq!(
            command_for(key(KeyCode::Char('9')), Focus::History, Position::Center),
            Command::Dispatch(Intent::MoveAt(Position::BottomRight))
        );
        assert_eq!(
            command_for(key(KeyCode::Char('0')), Focus::Board, Position::Center),
            Command::Ignore
        );
    }

    #[test]
    fn test_arrows_depend_on_focus() {
        assert_eq!(
            command_for(key(KeyCode::Up), Focus::Board, Position::Center),
            Command::Cursor(Position::TopCenter)
        );
        assert_eq!(
            command_for(key(KeyCode::Up), Focus::History, Position::Center),
            Command::Scroll(-1)
        );
        assert_eq!(
            command_for(key(KeyCode::Down), Focus::History, Position::Center),
            Command::Scroll(1)
        );
    }

    #[test]
    fn test_global_keys() {
        let cursor = Position::Center;
        assert_eq!(
            command_for(key(KeyCode::Char('q')), Focus::Board, cursor),
            Command::Quit
        );
        assert_eq!(
            command_for(key(KeyCode::Esc), Focus::History, cursor),
            Command::Quit
        );
        assert_eq!(
            command_for(key(KeyCode::Tab), Focus::Board, cursor),
            Command::SwitchFocus
        );
        assert_eq!(
            command_for(key(KeyCode::Char('s')), Focus::Board, cursor),
            Command::Dispatch(Intent::ToggleSort)
        );
        assert_eq!(
            command_for(key(KeyCode::Enter), Focus::History, cursor),
            Command::Select
        );
    }
}
