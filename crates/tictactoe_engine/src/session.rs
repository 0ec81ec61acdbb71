//! A single game from empty board to terminal state.

use super::action::Move;
use super::rules::{CoordinateOrder, MoveError, apply_move, classify, validate_move};
use super::state::GameState;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Owns the board, the player to move and the move history of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    board: Board,
    turn: Player,
    state: GameState,
    order: CoordinateOrder,
    history: Vec<Move>,
}

impl Session {
    /// Starts a game on an empty board with X to move.
    #[instrument]
    pub fn new(order: CoordinateOrder) -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            state: GameState::NotFinished,
            order,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the state after the last applied move.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the coordinate order used to read input.
    pub fn order(&self) -> CoordinateOrder {
        self.order
    }

    /// Returns the moves applied so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Validates raw input for the player to move without changing anything.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn validate(&self, input: &str) -> Result<usize, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }
        validate_move(input, &self.board, self.order)
    }

    /// Places the active player's mark at `index`, hands the turn over and
    /// classifies the result.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] once a terminal state was reached, otherwise
    /// whatever [`apply_move`] rejects.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn apply(&mut self, index: usize) -> Result<GameState, MoveError> {
        if self.state.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mov = apply_move(&mut self.board, index, self.turn)?;
        self.history.push(mov);
        self.turn = self.turn.toggle();
        self.state = classify(&self.board);

        if self.state.is_terminal() {
            info!(state = %self.state, moves = self.history.len(), "Game over");
        } else {
            debug!(next = %self.turn, "Turn passed");
        }
        Ok(self.state)
    }

    /// Validates and applies raw input in one step.
    pub fn submit(&mut self, input: &str) -> Result<GameState, MoveError> {
        let index = self.validate(input)?;
        self.apply(index)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(CoordinateOrder::default())
    }
}
