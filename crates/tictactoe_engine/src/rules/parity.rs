//! Mark parity check.

use super::super::{Board, Player};
use tracing::instrument;

/// Checks that the X and O mark counts differ by at most one.
///
/// Strictly alternating play can never break this. A board that does was
/// built some other way and classifies as impossible.
#[instrument(skip(board))]
pub fn is_possible(board: &Board) -> bool {
    board.count(Player::X).abs_diff(board.count(Player::O)) < 2
}
