//! Move validation and application.
//!
//! Validation reads raw coordinate text and checks it against the board in a
//! fixed order, so a caller can tell the player exactly what went wrong and
//! ask again. Application is the only path that writes to a [`Board`].

use super::super::action::Move;
use super::super::{Board, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why a proposed move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Error)]
pub enum MoveError {
    /// Input was not exactly two integers.
    #[display("You should enter numbers!")]
    MalformedInput,
    /// A coordinate is outside `1..=3`.
    #[display("Coordinates should be from 1 to 3")]
    OutOfBounds,
    /// The target cell already holds a mark.
    #[display("This cell is occupied! Choose another one!")]
    CellOccupied,
    /// The session already reached a terminal state.
    #[display("Game is already over")]
    GameOver,
}

/// How the two input tokens map onto row and column.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CoordinateOrder {
    /// First token is the row, second the column.
    #[default]
    RowCol,
    /// First token is the column, second the row.
    ColRow,
}

impl CoordinateOrder {
    /// Returns `(row, col)` for the tokens in input order.
    pub fn arrange(self, first: i64, second: i64) -> (i64, i64) {
        match self {
            CoordinateOrder::RowCol => (first, second),
            CoordinateOrder::ColRow => (second, first),
        }
    }
}

/// Splits input into exactly two integer tokens.
#[instrument]
pub fn parse_coordinates(input: &str) -> Result<(i64, i64), MoveError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [first, second] = tokens.as_slice() else {
        return Err(MoveError::MalformedInput);
    };
    let first = first.parse().map_err(|_| MoveError::MalformedInput)?;
    let second = second.parse().map_err(|_| MoveError::MalformedInput)?;
    Ok((first, second))
}

/// Validates raw input against the board and returns the target index.
///
/// Checks run in order: two integers, both in `1..=3`, target cell empty.
/// Nothing is written to the board.
#[instrument(skip(board))]
pub fn validate_move(
    input: &str,
    board: &Board,
    order: CoordinateOrder,
) -> Result<usize, MoveError> {
    let (first, second) = parse_coordinates(input)?;
    if ![first, second].iter().all(|v| (1..=3).contains(v)) {
        debug!(first, second, "Coordinates out of bounds");
        return Err(MoveError::OutOfBounds);
    }

    let (row, col) = order.arrange(first, second);
    let index = Board::to_coordinate_index(row as usize, col as usize);
    if !board.is_empty(index) {
        debug!(index, "Target cell occupied");
        return Err(MoveError::CellOccupied);
    }

    Ok(index)
}

/// Marks `index` for `player`.
///
/// Rejects out-of-range indices and occupied cells, so a board only ever
/// changes through a legal placement.
#[instrument(skip(board))]
pub fn apply_move(board: &mut Board, index: usize, player: Player) -> Result<Move, MoveError> {
    if board.cell_at(index).is_err() {
        return Err(MoveError::OutOfBounds);
    }
    if !board.is_empty(index) {
        return Err(MoveError::CellOccupied);
    }
    board.place(index, player);
    let mov = Move::new(player, index);
    debug!(%mov, "Move applied");
    Ok(mov)
}
