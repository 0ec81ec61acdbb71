//! Tick-Tack-Toe - unified CLI
//!
//! Plays a game on stdin/stdout or classifies a single grid.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tick_tack_toe::{Cli, Command, Driver, Settings};
use tictactoe_engine::{Board, CoordinateOrder, classify};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command() {
        Command::Play { config, order } => run_play(config, order),
        Command::Classify { grid } => run_classify(&grid),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over the settings filter.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Play one game on the terminal
fn run_play(config: Option<PathBuf>, order: Option<CoordinateOrder>) -> Result<()> {
    let mut settings = Settings::load(config.as_deref())?;
    if let Some(order) = order {
        settings = settings.with_coordinate_order(order);
    }
    init_tracing(settings.log_filter());

    info!(?settings, "Starting Tick-Tack-Toe");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut driver = Driver::new(stdin.lock(), stdout.lock(), settings);
    let state = driver.run().context("Game ended early")?;

    info!(%state, moves = driver.session().history().len(), "Session complete");
    Ok(())
}

/// Classify a grid given on the command line
fn run_classify(grid: &str) -> Result<()> {
    init_tracing("warn");

    let board: Board = grid
        .parse()
        .with_context(|| format!("Invalid grid {:?}", grid))?;
    println!("{}", board);
    println!("{}", classify(&board));
    Ok(())
}
