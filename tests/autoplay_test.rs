//! Deferred opponent scheduling: delay, cancellation, and event flow.

use tictactoe::{CPU_MOVE_DELAY, Cell, Game, GameEvent, GameState, Mark};

fn count_marks(state: &GameState) -> usize {
    state.board().cells().iter().filter(|c| **c != Cell::Empty).count()
}

#[tokio::test(start_paused = true)]
async fn test_reply_is_deferred_by_the_delay() {
    let game = Game::new();

    game.play(0);
    assert_eq!(count_marks(&game.snapshot()), 1, "no synchronous reply");

    tokio::time::advance(CPU_MOVE_DELAY / 2).await;
    assert_eq!(count_marks(&game.snapshot()), 1, "no reply before the delay");

    game.settle().await;
    let state = game.snapshot();
    assert_eq!(count_marks(&state), 2);
    assert_eq!(
        state.board().get(4),
        Some(Cell::Marked(Mark::O)),
        "reply takes the center"
    );
    assert_eq!(state.current(), Mark::X, "turn hands back after the reply");
}

#[tokio::test(start_paused = true)]
async fn test_reset_cancels_the_pending_reply() {
    let game = Game::new();
    let mut rx = game.subscribe();

    game.play(0);
    tokio::time::advance(CPU_MOVE_DELAY / 2).await;

    game.reset(Mark::X);
    game.settle().await;
    tokio::time::advance(CPU_MOVE_DELAY * 4).await;

    let state = game.snapshot();
    assert_eq!(state.board().open_cells().len(), 9, "no stale reply lands");
    assert_eq!(state.current(), Mark::X);

    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    assert_eq!(
        events,
        vec![
            GameEvent::MoveMade {
                mark: Mark::X,
                index: 0
            },
            GameEvent::CpuThinking { mark: Mark::O },
            GameEvent::Reset { starting: Mark::X },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_only_latest_scheduled_reply_lands() {
    let game = Game::new();

    game.play(0); // X, schedules a reply for O
    game.play(1); // played by hand for O inside the window
    game.play(2); // X again, reschedules

    game.settle().await;
    tokio::time::advance(CPU_MOVE_DELAY * 4).await;

    let state = game.snapshot();
    assert_eq!(count_marks(&state), 4, "exactly one automated reply landed");
    assert_eq!(state.current(), Mark::X);
}

#[tokio::test(start_paused = true)]
async fn test_disabled_opponent_never_replies() {
    let game = Game::new();
    game.set_vs_cpu(false);

    game.play(0);
    game.settle().await;
    tokio::time::advance(CPU_MOVE_DELAY * 4).await;

    assert_eq!(count_marks(&game.snapshot()), 1);
}

#[tokio::test]
async fn test_round_event_order() {
    let game = Game::new();
    let mut rx = game.subscribe();

    game.play(0);
    game.settle().await;

    assert_eq!(
        rx.try_recv(),
        Ok(GameEvent::MoveMade {
            mark: Mark::X,
            index: 0
        })
    );
    assert_eq!(rx.try_recv(), Ok(GameEvent::CpuThinking { mark: Mark::O }));
    assert_eq!(
        rx.try_recv(),
        Ok(GameEvent::MoveMade {
            mark: Mark::O,
            index: 4
        })
    );
    assert!(rx.try_recv().is_err(), "quiet until the next play");
}

#[tokio::test]
async fn test_opponent_blocks_and_wins_in_live_play() {
    let game = Game::new();

    game.play(0); // X corner
    game.settle().await; // O takes the center
    game.play(1); // X threatens the top row
    game.settle().await; // O blocks

    let state = game.snapshot();
    assert_eq!(state.board().get(4), Some(Cell::Marked(Mark::O)));
    assert_eq!(
        state.board().get(2),
        Some(Cell::Marked(Mark::O)),
        "threat blocked"
    );

    game.play(3); // X starts the left column; O has 2-4 live
    game.settle().await; // O completes 2-4-6

    let state = game.snapshot();
    assert_eq!(state.winner(), Some(Mark::O));
    assert!(state.is_over());
}

#[tokio::test]
async fn test_opponent_plays_x_after_the_handoff() {
    let game = Game::new();
    game.set_cpu_mark(Mark::X);

    game.play(0); // placed by hand for X; no reply scheduled for O's turn
    game.settle().await;
    assert_eq!(count_marks(&game.snapshot()), 1);

    game.play(4); // O; the turn returns to X, which is automated
    game.settle().await;

    let state = game.snapshot();
    assert_eq!(count_marks(&state), 3);
    assert_eq!(
        state.board().get(2),
        Some(Cell::Marked(Mark::X)),
        "corner reply"
    );
}
