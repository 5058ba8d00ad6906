//! Tic-tac-toe - terminal tic-tac-toe with a built-in opponent.

#![warn(missing_docs)]

mod cli;
#[allow(unused_imports)] // Re-exports serve the library's public API
mod engine;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use engine::{Game, Mark};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            moves,
            starting,
            cpu,
            json,
        } => run_play(moves, starting, cpu, json).await,
        Command::Tui {
            two_player,
            cpu_mark,
            starting,
        } => tui::run_tui(two_player, cpu_mark, starting).await,
    }
}

/// Play a scripted sequence of moves and print the outcome.
async fn run_play(moves: Vec<usize>, starting: Mark, cpu: Option<Mark>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!(?moves, %starting, ?cpu, "Playing scripted game");

    let game = Game::new();
    match cpu {
        Some(mark) => game.set_cpu_mark(mark),
        None => game.set_vs_cpu(false),
    }
    if starting != Mark::X {
        game.reset(starting);
    }

    for index in moves {
        game.play(index);
        // Let a scheduled opponent reply land before the next scripted move
        game.settle().await;
    }

    let state = game.snapshot();
    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        println!("{}", state.board().display());
        match state.winner() {
            Some(mark) => println!("Winner: {}", mark),
            None if state.is_draw() => println!("Draw"),
            None => println!("Next to move: {}", state.current()),
        }
    }

    Ok(())
}
