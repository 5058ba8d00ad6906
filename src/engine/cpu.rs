//! Heuristic move selection for the built-in opponent.

use super::rules::check_winner;
use super::{Board, Cell, Mark};
use tracing::{debug, instrument};

/// The center cell.
const CENTER: usize = 4;

/// Corner cells, in fixed preference order.
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Picks a move for `mark` on the given board.
///
/// Priority order, first match wins:
/// 1. Complete a line for `mark`.
/// 2. Block a line the opponent could complete.
/// 3. Take the center.
/// 4. Take the first open corner of `[0, 2, 6, 8]`.
/// 5. Take the first open cell.
///
/// Each rule scans open cells in ascending index order. Returns `None` only
/// when no cell is open. This is a depth-1 lookahead, not optimal play.
#[instrument(skip(board))]
pub fn best_move(board: &Board, mark: Mark) -> Option<usize> {
    let open = board.open_cells();

    if let Some(index) = completing_move(board, mark, &open) {
        debug!(%mark, index, rule = "win", "Opponent move selected");
        return Some(index);
    }

    if let Some(index) = completing_move(board, mark.other(), &open) {
        debug!(%mark, index, rule = "block", "Opponent move selected");
        return Some(index);
    }

    if open.contains(&CENTER) {
        debug!(%mark, index = CENTER, rule = "center", "Opponent move selected");
        return Some(CENTER);
    }

    if let Some(index) = CORNERS.into_iter().find(|c| open.contains(c)) {
        debug!(%mark, index, rule = "corner", "Opponent move selected");
        return Some(index);
    }

    let index = open.first().copied();
    debug!(%mark, ?index, rule = "first-open", "Opponent move selected");
    index
}

/// First open cell where placing `mark` completes a line for `mark`.
///
/// Candidates are tried on a scratch copy; the real board is never mutated
/// during evaluation.
fn completing_move(board: &Board, mark: Mark, open: &[usize]) -> Option<usize> {
    open.iter().copied().find(|&index| {
        let mut scratch = board.clone();
        scratch.set(index, Cell::Marked(mark));
        check_winner(&scratch) == Some(mark)
    })
}
