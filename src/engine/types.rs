//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// The X mark (moves first by default).
    #[display("X")]
    X,
    /// The O mark.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the other mark (X↔O).
    pub fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::str::FromStr for Mark {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "x" | "X" => Ok(Mark::X),
            "o" | "O" => Ok(Mark::O),
            other => Err(format!("expected 'x' or 'o', got '{}'", other)),
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Marked(Mark),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Sets the cell at the given index. Callers check bounds first.
    pub(super) fn set(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Checks if the cell at the given index is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the indices of all empty cells, in ascending order.
    pub fn open_cells(&self) -> Vec<usize> {
        (0..9).filter(|&i| self.is_empty(i)).collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their index so a reader can name a move.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => index.to_string(),
                    Cell::Marked(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete published game state.
///
/// `winner` and `is_draw` are mutually exclusive; while both are unset the
/// game is still in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark to move next.
    current: Mark,
    /// Winner, once a line is completed.
    winner: Option<Mark>,
    /// True only when the board is full with no winner.
    is_draw: bool,
    /// Whether the built-in opponent is enabled.
    vs_cpu: bool,
    /// Which mark the built-in opponent plays.
    cpu_mark: Mark,
}

impl GameState {
    /// Creates the initial state: empty board, X to move, opponent enabled
    /// and playing O.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
            winner: None,
            is_draw: false,
            vs_cpu: true,
            cpu_mark: Mark::O,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    pub fn current(&self) -> Mark {
        self.current
    }

    /// Returns the winner, if the game has been won.
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// Returns true if the game ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.is_draw
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_draw
    }

    /// Returns whether the built-in opponent is enabled.
    pub fn vs_cpu(&self) -> bool {
        self.vs_cpu
    }

    /// Returns the mark the built-in opponent plays.
    pub fn cpu_mark(&self) -> Mark {
        self.cpu_mark
    }

    /// Places a mark (unchecked - `Game::play` validates first).
    pub(super) fn place(&mut self, index: usize, mark: Mark) {
        self.board.set(index, Cell::Marked(mark));
    }

    /// Hands the turn to the other mark.
    pub(super) fn advance(&mut self) {
        self.current = self.current.other();
    }

    pub(super) fn set_winner(&mut self, mark: Mark) {
        self.winner = Some(mark);
    }

    pub(super) fn set_draw(&mut self) {
        self.is_draw = true;
    }

    /// Clears the round state. Opponent configuration persists.
    pub(super) fn reset_round(&mut self, starting: Mark) {
        self.board = Board::new();
        self.current = starting;
        self.winner = None;
        self.is_draw = false;
    }

    pub(super) fn set_vs_cpu(&mut self, enabled: bool) {
        self.vs_cpu = enabled;
    }

    pub(super) fn set_cpu_mark(&mut self, mark: Mark) {
        self.cpu_mark = mark;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
