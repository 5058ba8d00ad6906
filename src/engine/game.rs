//! The game engine: turn sequencing, end-of-game evaluation, and
//! scheduling of the built-in opponent.

use super::cpu;
use super::rules::{check_winner, is_full};
use super::types::{GameState, Mark};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};

/// Delay before a scheduled opponent move lands.
///
/// Purely perceptual pacing so the opponent's reply reads as a discrete
/// event; no correctness hangs on the exact value.
pub const CPU_MOVE_DELAY: Duration = Duration::from_millis(250);

/// State change notifications published to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A mark was placed.
    MoveMade {
        /// The mark that was placed.
        mark: Mark,
        /// Where it was placed (0-8).
        index: usize,
    },
    /// An opponent move was scheduled and will land after [`CPU_MOVE_DELAY`].
    CpuThinking {
        /// The mark the opponent will place.
        mark: Mark,
    },
    /// The game ended. `winner` is `None` for a draw.
    GameOver {
        /// The winning mark, if any.
        winner: Option<Mark>,
    },
    /// The game was reset.
    Reset {
        /// The mark that moves first in the new game.
        starting: Mark,
    },
}

#[derive(Debug)]
struct Inner {
    state: GameState,
    subscribers: Vec<mpsc::UnboundedSender<GameEvent>>,
    /// Bumped by every reset; a scheduled opponent move carries the era it
    /// was created in and no-ops when the eras no longer match.
    era: u64,
    pending_cpu: Option<JoinHandle<()>>,
}

impl Inner {
    fn notify(&mut self, event: GameEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

/// Handle to a shared tic-tac-toe game.
///
/// Clones share the same underlying state; mutations serialize on an
/// internal lock. Invalid operations are silent no-ops: the engine never
/// reports errors, callers disable controls instead of handling failures.
///
/// Opponent scheduling spawns onto the ambient Tokio runtime, so games
/// should live inside one.
#[derive(Debug, Clone)]
pub struct Game {
    inner: Arc<Mutex<Inner>>,
}

impl Game {
    /// Creates a new game with the default state: empty board, X to move,
    /// opponent enabled and playing O.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                state: GameState::new(),
                subscribers: Vec::new(),
                era: 0,
                pending_cpu: None,
            })),
        }
    }

    /// Plays the current mark at `index` (0-8).
    ///
    /// A no-op if the game is over, the index is out of range, or the cell
    /// is occupied. On completing a move that hands the turn to the enabled
    /// opponent, one automated reply is scheduled.
    #[instrument(skip(self))]
    pub fn play(&self, index: usize) {
        let mut inner = self.inner.lock().unwrap();
        self.apply(&mut inner, index);
    }

    /// Core move path, shared by `play` and the scheduled opponent.
    fn apply(&self, inner: &mut Inner, index: usize) {
        if inner.state.is_over() || index >= 9 || !inner.state.board().is_empty(index) {
            debug!(index, "Move rejected");
            return;
        }

        let mark = inner.state.current();
        inner.state.place(index, mark);
        debug!(%mark, index, "Mark placed");
        inner.notify(GameEvent::MoveMade { mark, index });

        if let Some(winner) = check_winner(inner.state.board()) {
            info!(%winner, "Game won");
            inner.state.set_winner(winner);
            inner.notify(GameEvent::GameOver {
                winner: Some(winner),
            });
            return;
        }

        if is_full(inner.state.board()) {
            info!("Game drawn");
            inner.state.set_draw();
            inner.notify(GameEvent::GameOver { winner: None });
            return;
        }

        inner.state.advance();
        if inner.state.vs_cpu() && inner.state.current() == inner.state.cpu_mark() {
            self.schedule_cpu(inner);
        }
    }

    /// Schedules the single deferred opponent move.
    fn schedule_cpu(&self, inner: &mut Inner) {
        // At most one pending opponent move at a time.
        if let Some(stale) = inner.pending_cpu.take() {
            stale.abort();
        }

        let era = inner.era;
        let mark = inner.state.cpu_mark();
        debug!(%mark, era, "Scheduling opponent move");
        inner.notify(GameEvent::CpuThinking { mark });

        let game = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(CPU_MOVE_DELAY).await;
            game.cpu_move(era);
        });
        inner.pending_cpu = Some(handle);
    }

    /// Fires the scheduled opponent move.
    ///
    /// Preconditions are re-validated against current state under the lock,
    /// not against state captured at scheduling time: the era must still
    /// match and the game must not have ended in the meantime.
    fn cpu_move(&self, era: u64) {
        let mut inner = self.inner.lock().unwrap();
        if inner.era != era {
            debug!(era, current_era = inner.era, "Stale opponent move dropped");
            return;
        }
        inner.pending_cpu = None;
        if inner.state.is_over() {
            return;
        }
        if let Some(index) = cpu::best_move(inner.state.board(), inner.state.cpu_mark()) {
            self.apply(&mut inner, index);
        }
    }

    /// Resets the game so `starting` moves first on an empty board.
    ///
    /// Opponent configuration persists. Any pending scheduled opponent move
    /// is invalidated and cannot fire against the new game.
    #[instrument(skip(self))]
    pub fn reset(&self, starting: Mark) {
        let mut inner = self.inner.lock().unwrap();
        inner.era += 1;
        if let Some(pending) = inner.pending_cpu.take() {
            pending.abort();
        }
        inner.state.reset_round(starting);
        info!(%starting, "Game reset");
        inner.notify(GameEvent::Reset { starting });
    }

    /// Enables or disables the built-in opponent.
    pub fn set_vs_cpu(&self, enabled: bool) {
        self.inner.lock().unwrap().state.set_vs_cpu(enabled);
    }

    /// Sets which mark the built-in opponent plays.
    pub fn set_cpu_mark(&self, mark: Mark) {
        self.inner.lock().unwrap().state.set_cpu_mark(mark);
    }

    /// Returns a snapshot of the current published state.
    pub fn snapshot(&self) -> GameState {
        self.inner.lock().unwrap().state.clone()
    }

    /// Subscribes to state change events.
    ///
    /// Events are delivered synchronously inside the mutating call, so a
    /// change is visible to subscribers before the call returns. Dropped
    /// receivers are pruned on the next send.
    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<GameEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.inner.lock().unwrap().subscribers.push(tx);
        rx
    }

    /// Waits until no scheduled opponent move is pending.
    pub async fn settle(&self) {
        loop {
            let pending = self.inner.lock().unwrap().pending_cpu.take();
            match pending {
                Some(handle) => {
                    let _ = handle.await;
                }
                None => break,
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
