//! Row/column addressing of board cells.

use super::types::{BOARD_SIZE, Board};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A 1-based `(row, col)` pair naming one cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    row: usize,
    col: usize,
}

impl Coordinate {
    /// Creates a coordinate if both values are in `1..=3`.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        ((1..=3).contains(&row) && (1..=3).contains(&col)).then_some(Self { row, col })
    }

    /// Returns the row (1-3).
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the column (1-3).
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts to a board index (0-8).
    pub fn to_index(self) -> usize {
        Board::to_coordinate_index(self.row, self.col)
    }

    /// Creates a coordinate from a board index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < BOARD_SIZE).then_some(Self {
            row: index / 3 + 1,
            col: index % 3 + 1,
        })
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_SIZE).filter_map(Self::from_index)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
