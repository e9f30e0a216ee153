//! Keyboard mapping: cursor movement and direct cell keys.

use crossterm::event::KeyCode;
use noughts_core::Position;

/// Moves the cursor for arrow keys and hjkl, stopping at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Left | KeyCode::Char('h') => Position::at(row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => Position::at(row, col + 1),
        KeyCode::Up | KeyCode::Char('k') => Position::at(row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => Position::at(row + 1, col),
        _ => None,
    };

    target.unwrap_or(cursor)
}

/// Maps keys 1-9 to cells in reading order.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c @ '1'..='9') => {
            let digit = c.to_digit(10)? as usize;
            Position::from_index(digit - 1)
        }
        _ => None,
    }
}
