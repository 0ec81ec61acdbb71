//! Terminal driver: draws the board, reads moves and reports the outcome.
//!
//! The driver is generic over its input and output so a whole game can be
//! scripted in tests. It owns the [`Session`] for the duration of one game.

use crate::settings::Settings;
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use tictactoe_engine::{GameState, Session};
use tracing::{debug, info, instrument, warn};

/// Prompt printed before each move.
pub const PROMPT: &str = "Enter the coordinates: ";

/// Errors that end a game before it reaches a terminal state.
#[derive(Debug, Display, Error, From)]
pub enum DriverError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    Io(std::io::Error),
    /// The session refused a move that had passed validation.
    #[display("Move rejected: {}", _0)]
    Move(tictactoe_engine::MoveError),
    /// Input ended while the game was still running.
    #[display("Input closed before the game finished")]
    #[from(skip)]
    InputClosed,
}

/// Plays one game over a line-oriented input and a text output.
#[derive(Debug)]
pub struct Driver<R, W> {
    input: R,
    output: W,
    settings: Settings,
    session: Session,
}

impl<R: BufRead, W: Write> Driver<R, W> {
    /// Creates a driver with a fresh session configured from `settings`.
    #[instrument(skip(input, output))]
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        let session = Session::new(*settings.coordinate_order());
        Self {
            input,
            output,
            settings,
            session,
        }
    }

    /// Returns the session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the driver and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the game until a terminal state and returns it.
    ///
    /// # Errors
    ///
    /// Fails on I/O errors or when input ends mid-game. Rejected moves are
    /// not errors; the same player is asked again.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<GameState, DriverError> {
        info!("Starting game");
        loop {
            writeln!(self.output, "{}", self.session.board())?;
            if *self.settings.show_turn() {
                writeln!(self.output, "Game turn: {}", self.session.turn())?;
            }

            let index = self.read_move()?;
            let state = self.session.apply(index)?;

            if state.is_terminal() {
                writeln!(self.output, "{}", self.session.board())?;
                writeln!(self.output, "{}", state)?;
                self.output.flush()?;
                info!(%state, "Game finished");
                return Ok(state);
            }
        }
    }

    /// Prompts until the active player enters a legal move.
    #[instrument(skip(self), fields(turn = %self.session.turn()))]
    fn read_move(&mut self) -> Result<usize, DriverError> {
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                warn!("Input closed mid-game");
                return Err(DriverError::InputClosed);
            }

            match self.session.validate(&line) {
                Ok(index) => return Ok(index),
                Err(e) => {
                    debug!(input = line.trim_end(), error = %e, "Move rejected");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }
}
