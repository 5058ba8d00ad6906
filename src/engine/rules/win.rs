//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use tracing::instrument;

/// The eight winning lines: 3 rows, 3 columns, 2 diagonals, in that order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first line (in [`WIN_LINES`] order) whose
/// three cells hold the same mark, `None` otherwise. Under alternating play
/// at most one mark can have a completed line, so the scan order only
/// matters for reproducibility.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    for [a, b, c] in WIN_LINES {
        let cell = board.get(a);
        if cell != Some(Cell::Empty) && cell == board.get(b) && cell == board.get(c) {
            return match cell {
                Some(Cell::Marked(mark)) => Some(mark),
                _ => None,
            };
        }
    }

    None
}
