//! Terminal UI for tictactoe.

mod app;
mod input;
mod ui;

use crate::engine::{Game, GameEvent, Mark};
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

/// Run the interactive terminal UI.
pub async fn run_tui(two_player: bool, cpu_mark: Mark, starting: Mark) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create("tictactoe_tui.log")?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(two_player, %cpu_mark, %starting, "Starting tictactoe TUI");

    let game = Game::new();
    game.set_vs_cpu(!two_player);
    game.set_cpu_mark(cpu_mark);
    let event_rx = game.subscribe();
    if starting != Mark::X {
        game.reset(starting);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(game);
    let res = run_app(&mut terminal, app, event_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    mut event_rx: mpsc::UnboundedReceiver<GameEvent>,
) -> Result<()>
where
    // Terminal errors surface through anyhow
    B::Error: Send + Sync + 'static,
{
    loop {
        app.refresh();
        terminal.draw(|f| ui::draw(f, &app))?;

        // Drain engine events published since the last frame
        while let Ok(event) = event_rx.try_recv() {
            app.handle_event(event);
        }

        // Check for keyboard input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Char('r') => app.restart(Mark::X),
                    KeyCode::Char('o') => app.restart(Mark::O),
                    KeyCode::Char('p') => app.toggle_opponent(),
                    KeyCode::Char('s') => app.swap_cpu_mark(),
                    KeyCode::Enter | KeyCode::Char(' ') => app.play_at_cursor(),
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        if let Some(digit) = c.to_digit(10) {
                            let index = digit as usize;
                            if index < 9 {
                                app.play(index);
                            }
                        }
                    }
                    code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                        app.move_cursor(code);
                    }
                    _ => {}
                }
            }
        }
    }
}
