//! Game engine: board model, rules, the heuristic opponent, and the
//! shared [`Game`] handle.

mod cpu;
mod game;
mod rules;
mod types;

pub use cpu::best_move;
pub use game::{CPU_MOVE_DELAY, Game, GameEvent};
pub use rules::{WIN_LINES, check_winner, is_full};
pub use types::{Board, Cell, GameState, Mark};
