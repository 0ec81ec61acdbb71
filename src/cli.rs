//! Command-line interface for tick_tack_toe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::CoordinateOrder;

/// Tick-Tack-Toe - two players, one terminal
#[derive(Parser, Debug)]
#[command(name = "tick_tack_toe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game, reading moves from stdin
    Play {
        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Token order for coordinates: row-col or col-row
        #[arg(long)]
        order: Option<CoordinateOrder>,
    },

    /// Classify a 9-character grid such as "XXXOO__O_"
    Classify {
        /// Cells in row-major order; X, O, and _ or space for empty
        grid: String,
    },
}

impl Cli {
    /// Returns the chosen command, falling back to `play` with defaults.
    pub fn command(self) -> Command {
        self.command.unwrap_or(Command::Play {
            config: None,
            order: None,
        })
    }
}
