//! Tic-tac-toe with a built-in heuristic opponent.
//!
//! The engine is a small shared-state core: callers place marks, the
//! engine evaluates wins and draws, and an optional automated opponent
//! replies after a short delay.
//!
//! # Architecture
//!
//! - **Board model**: marks, cells, and the fixed 3x3 board
//! - **Rules**: win detection over the eight lines, draw on a full board
//! - **Opponent**: priority-rule move selection ([`best_move`])
//! - **Game handle**: shared state with published change events
//!
//! # Example
//!
//! ```no_run
//! use tictactoe::{Game, Mark};
//!
//! # async fn example() {
//! let game = Game::new();
//! game.play(4);
//! game.settle().await;
//!
//! let state = game.snapshot();
//! println!("{}", state.board().display());
//! assert_eq!(state.current(), Mark::X);
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Board model, rules, opponent heuristic, and the shared game handle.
pub mod engine;

// Crate-level exports - game handle and events
pub use engine::{CPU_MOVE_DELAY, Game, GameEvent};

// Crate-level exports - board model
pub use engine::{Board, Cell, GameState, Mark};

// Crate-level exports - rules and opponent heuristic
pub use engine::{WIN_LINES, best_move, check_winner, is_full};
