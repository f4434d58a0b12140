//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use mathgrid::{Coord, BOARD_SIZE};

/// Moves the cursor one cell in the direction of an arrow key,
/// clamped to the board.
pub fn move_cursor(cursor: Coord, key: KeyCode) -> Coord {
    let (row, col) = (cursor.row, cursor.col);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(BOARD_SIZE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(BOARD_SIZE - 1)),
        _ => (row, col),
    };
    Coord { row, col }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        let c = move_cursor(Coord { row: 2, col: 2 }, KeyCode::Up);
        assert_eq!(c, Coord { row: 1, col: 2 });
        let c = move_cursor(c, KeyCode::Right);
        assert_eq!(c, Coord { row: 1, col: 3 });
    }

    #[test]
    fn test_clamped_at_edges() {
        let origin = Coord { row: 0, col: 0 };
        assert_eq!(move_cursor(origin, KeyCode::Up), origin);
        assert_eq!(move_cursor(origin, KeyCode::Left), origin);

        let corner = Coord { row: 4, col: 4 };
        assert_eq!(move_cursor(corner, KeyCode::Down), corner);
        assert_eq!(move_cursor(corner, KeyCode::Right), corner);
    }
}
