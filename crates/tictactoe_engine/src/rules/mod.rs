//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]: win lines, the draw condition, the mark
//! parity check and move validation. [`classify`] combines them into a
//! [`GameState`].

mod draw;
mod moves;
mod parity;
mod win;

pub use draw::has_empty_cells;
pub use moves::{CoordinateOrder, MoveError, apply_move, parse_coordinates, validate_move};
pub use parity::is_possible;
pub use win::{WIN_LINES, is_winner};

use super::state::GameState;
use super::types::{Board, Player};
use tracing::{instrument, trace};

/// Classifies a board. The first matching rule wins:
///
/// 1. [`GameState::Impossible`] when the mark counts differ by two or more.
/// 2. [`GameState::XWins`] when X holds a line. X is checked before O, so a
///    board where both hold a line still reports an X win.
/// 3. [`GameState::OWins`] when O holds a line.
/// 4. [`GameState::Draw`] when no cell is empty.
/// 5. [`GameState::NotFinished`] otherwise.
#[instrument(skip(board))]
pub fn classify(board: &Board) -> GameState {
    let state = if !is_possible(board) {
        GameState::Impossible
    } else if is_winner(board, Player::X) {
        GameState::XWins
    } else if is_winner(board, Player::O) {
        GameState::OWins
    } else if !has_empty_cells(board) {
        GameState::Draw
    } else {
        GameState::NotFinished
    };
    trace!(?state, "Board classified");
    state
}
