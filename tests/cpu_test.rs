//! Opponent heuristic on positions reached through legal play.

use tictactoe::{Board, Game, Mark, best_move};

/// Plays `moves` in order from an empty board and returns the result.
fn board_after(starting: Mark, moves: &[usize]) -> Board {
    let game = Game::new();
    game.set_vs_cpu(false);
    game.reset(starting);
    for &index in moves {
        game.play(index);
    }
    game.snapshot().board().clone()
}

#[test]
fn test_takes_winning_cell_over_everything() {
    // X: 0 1, O: 3 4 - both sides have an open winning cell
    let board = board_after(Mark::X, &[0, 3, 1, 4]);

    assert_eq!(best_move(&board, Mark::X), Some(2), "X completes the top row");
    assert_eq!(best_move(&board, Mark::O), Some(5), "O completes the middle row");
}

#[test]
fn test_blocks_opponent_threat() {
    // X: 0 1, O: 3 - O has no win, so blocking the top row beats the
    // open center
    let board = board_after(Mark::X, &[0, 3, 1]);

    assert_eq!(best_move(&board, Mark::O), Some(2));
}

#[test]
fn test_takes_center_when_no_line_is_live() {
    let board = board_after(Mark::X, &[0]);

    assert_eq!(best_move(&board, Mark::O), Some(4));
}

#[test]
fn test_takes_first_open_corner_when_center_is_gone() {
    // X holds the center; nothing is threatened yet
    let board = board_after(Mark::X, &[4]);

    assert_eq!(best_move(&board, Mark::O), Some(0));
}

#[test]
fn test_corner_scan_skips_occupied_corners() {
    // X: 4 8, O: 0 - the 0-4-8 diagonal is dead, corner scan lands on 2
    let board = board_after(Mark::X, &[4, 0, 8]);

    assert_eq!(best_move(&board, Mark::O), Some(2));
}

#[test]
fn test_double_threat_resolves_to_lowest_index() {
    // X: 0 1 3 can win at 2 (top row) or 6 (left column)
    let board = board_after(Mark::X, &[0, 4, 1, 8, 3]);

    assert_eq!(best_move(&board, Mark::X), Some(2));
}

#[test]
fn test_full_board_yields_no_move() {
    // Drawn board
    let board = board_after(Mark::X, &[0, 4, 8, 2, 6, 3, 5, 7, 1]);

    assert_eq!(best_move(&board, Mark::X), None);
    assert_eq!(best_move(&board, Mark::O), None);
}
