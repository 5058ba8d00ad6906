//! Application state and logic.

use crate::engine::{Game, GameEvent, GameState, Mark};
use crossterm::event::KeyCode;
use tracing::debug;

/// Main application state.
pub struct App {
    game: Game,
    state: GameState,
    cursor: usize,
    status_message: String,
    /// True from the moment an opponent move is scheduled until it lands.
    waiting: bool,
}

impl App {
    /// Creates a new application around a game handle.
    pub fn new(game: Game) -> Self {
        let state = game.snapshot();
        let status_message = format!("{} to move.", state.current());
        Self {
            game,
            state,
            cursor: 4,
            status_message,
            waiting: false,
        }
    }

    /// Latest snapshot of the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Cell index the cursor is on.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Refreshes the cached snapshot from the engine.
    pub fn refresh(&mut self) {
        self.state = self.game.snapshot();
    }

    /// Handles a game event.
    pub fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::MoveMade { mark, index } => {
                self.waiting = false;
                self.status_message = format!("{} played {}", mark, index);
            }
            GameEvent::CpuThinking { mark } => {
                self.waiting = true;
                self.status_message = format!("{} is thinking...", mark);
            }
            GameEvent::GameOver { winner } => {
                self.waiting = false;
                self.status_message = match winner {
                    Some(mark) => {
                        format!("{} wins! Press 'r' to restart or 'q' to quit.", mark)
                    }
                    None => "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string(),
                };
            }
            GameEvent::Reset { starting } => {
                self.waiting = false;
                self.status_message = format!("New game. {} moves first.", starting);
            }
        }

        self.refresh();
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = super::input::move_cursor(self.cursor, key);
    }

    /// Plays at the cursor position.
    pub fn play_at_cursor(&mut self) {
        self.play(self.cursor);
    }

    /// Plays at `index`, unless an opponent move is pending.
    pub fn play(&mut self, index: usize) {
        if self.waiting {
            debug!(index, "Input ignored while opponent move pending");
            return;
        }
        self.game.play(index);
        self.refresh();
    }

    /// Restarts the game with `starting` to move.
    pub fn restart(&mut self, starting: Mark) {
        debug!(%starting, "Restarting game");
        self.game.reset(starting);
        self.refresh();
    }

    /// Toggles the built-in opponent on or off.
    pub fn toggle_opponent(&mut self) {
        let enabled = !self.state.vs_cpu();
        self.game.set_vs_cpu(enabled);
        self.refresh();
        self.status_message = if enabled {
            format!("Opponent on, playing {}.", self.state.cpu_mark())
        } else {
            "Opponent off. Two players at one keyboard.".to_string()
        };
    }

    /// Swaps which mark the opponent plays.
    pub fn swap_cpu_mark(&mut self) {
        let mark = self.state.cpu_mark().other();
        self.game.set_cpu_mark(mark);
        self.refresh();
        self.status_message = format!("Opponent now plays {}.", mark);
    }
}
