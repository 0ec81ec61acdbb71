//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Cell};
use tracing::instrument;

/// Checks if any cell is still empty.
///
/// A board without empty cells and without a winner is a draw.
#[instrument(skip(board))]
pub fn has_empty_cells(board: &Board) -> bool {
    board.cells().contains(&Cell::Empty)
}
