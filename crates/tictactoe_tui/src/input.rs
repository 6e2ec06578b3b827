//! Translation of terminal events into app actions.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tictactoe_engine::Position;

use crate::ui::{ScreenLayout, Target};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Mark the given square.
    Place(Position),
    /// Mark the square under the keyboard cursor.
    PlaceAtCursor,
    /// Move the keyboard cursor.
    MoveCursor(Direction),
    /// Clear the board and open the next round.
    Restart,
    /// Leave the program.
    Quit,
    /// Nothing to do.
    Ignore,
}

/// Moves cursor one square, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

/// Maps a key press to an action.
pub fn action_for_key(key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::Ignore;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Restart,
        KeyCode::Char(c) if c.is_ascii_digit() => {
            Position::from_key(c).map_or(Action::Ignore, Action::Place)
        }
        KeyCode::Up | KeyCode::Char('k') => Action::MoveCursor(Direction::Up),
        KeyCode::Down | KeyCode::Char('j') => Action::MoveCursor(Direction::Down),
        KeyCode::Left | KeyCode::Char('h') => Action::MoveCursor(Direction::Left),
        KeyCode::Right | KeyCode::Char('l') => Action::MoveCursor(Direction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
        _ => Action::Ignore,
    }
}

/// Maps a left click to the square or button under the pointer.
pub fn action_for_mouse(mouse: MouseEvent, layout: &ScreenLayout) -> Action {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Action::Ignore;
    }

    match layout.hit(mouse.column, mouse.row) {
        Some(Target::Square(pos)) => Action::Place(pos),
        Some(Target::Restart) => Action::Restart,
        None => Action::Ignore,
    }
}
