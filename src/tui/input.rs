//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the cursor (a cell index, 0-8 row-major) based on arrow keys.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let row = cursor / 3;
    let col = cursor % 3;

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    row * 3 + col
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_grid() {
        assert_eq!(move_cursor(0, KeyCode::Right), 1);
        assert_eq!(move_cursor(4, KeyCode::Down), 7);
        assert_eq!(move_cursor(4, KeyCode::Up), 1);
        assert_eq!(move_cursor(5, KeyCode::Left), 4);
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor(0, KeyCode::Up), 0);
        assert_eq!(move_cursor(2, KeyCode::Right), 2);
        assert_eq!(move_cursor(6, KeyCode::Left), 6);
        assert_eq!(move_cursor(8, KeyCode::Down), 8);
    }
}
