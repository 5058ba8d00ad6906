//! Command-line interface for tictactoe.

use crate::engine::Mark;
use clap::{Parser, Subcommand};

/// Tic-tac-toe - terminal tic-tac-toe with a built-in opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with a built-in heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a scripted sequence of moves and print the outcome
    Play {
        /// Cell indices to play in order (0-8, row-major)
        moves: Vec<usize>,

        /// Mark that moves first
        #[arg(long, default_value = "X")]
        starting: Mark,

        /// Enable the built-in opponent for the given mark
        #[arg(long)]
        cpu: Option<Mark>,

        /// Print the final state as JSON instead of a board sketch
        #[arg(long)]
        json: bool,
    },

    /// Run the interactive terminal UI
    Tui {
        /// Disable the built-in opponent (two players at one keyboard)
        #[arg(long)]
        two_player: bool,

        /// Mark the built-in opponent plays
        #[arg(long, default_value = "O")]
        cpu_mark: Mark,

        /// Mark that moves first
        #[arg(long, default_value = "X")]
        starting: Mark,
    },
}
