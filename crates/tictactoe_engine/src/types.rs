//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const BOARD_SIZE: usize = 9;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn toggle(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the mark this player leaves on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::ops::Not for Player {
    type Output = Player;

    fn not(self) -> Self::Output {
        self.toggle()
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell marked by a player.
    Marked(Player),
}

impl Cell {
    /// Returns the display symbol, a blank for an empty cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(player) => player.symbol(),
        }
    }
}

/// Error for low-level board access with a bad index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Index is not in `0..=8`.
    #[display("Cell index {} is outside 0..=8", _0)]
    OutOfRange(#[error(not(source))] usize),
}

/// Error when reading a board from its 9-character grid form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum GridParseError {
    /// The grid did not have exactly nine cells.
    #[display("Grid must have 9 cells, got {}", _0)]
    WrongLength(#[error(not(source))] usize),
    /// A character is not `X`, `O`, `_` or a space.
    #[display("Unexpected cell symbol {:?}", _0)]
    InvalidSymbol(#[error(not(source))] char),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from explicit cell contents.
    ///
    /// This bypasses move application, so the result may hold configurations
    /// that alternating play can never reach.
    pub fn from_cells(cells: [Cell; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    #[instrument(skip(self))]
    pub fn cell_at(&self, index: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::OutOfRange(index))
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.cell_at(index), Ok(Cell::Empty))
    }

    /// Marks the cell for `player`.
    ///
    /// The cell must be empty; [`crate::apply_move`] checks that before
    /// calling.
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        debug_assert!(self.is_empty(index), "cell {index} is not empty");
        self.cells[index] = Cell::Marked(player);
    }

    /// Converts 1-based `(row, col)` to a 0-based row-major index.
    ///
    /// No range check happens here. Callers validate both values first.
    pub fn to_coordinate_index(row: usize, col: usize) -> usize {
        3 * (row - 1) + col - 1
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Counts the marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Marked(player))
            .count()
    }
}

impl FromStr for Board {
    type Err = GridParseError;

    /// Reads a grid such as `"XXOO_X__O"`, row-major, with `_` or a space
    /// for empty cells.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != BOARD_SIZE {
            return Err(GridParseError::WrongLength(symbols.len()));
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = match symbol.to_ascii_uppercase() {
                'X' => Cell::Marked(Player::X),
                'O' => Cell::Marked(Player::O),
                '_' | ' ' => Cell::Empty,
                other => return Err(GridParseError::InvalidSymbol(other)),
            };
        }
        Ok(Self { cells })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "---------")?;
        for row in self.cells.chunks(3) {
            writeln!(
                f,
                "| {} {} {} |",
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
        }
        write!(f, "---------")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_toggle_is_involutive() {
        for player in Player::iter() {
            assert_ne!(player.toggle(), player);
            assert_eq!(player.toggle().toggle(), player);
            assert_eq!(!!player, player);
        }
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell_at(8), Ok(Cell::Empty));
        assert_eq!(board.cell_at(9), Err(BoardError::OutOfRange(9)));
        assert!(!board.is_empty(9));
    }

    #[test]
    fn test_place_marks_cell() {
        let mut board = Board::new();
        board.place(4, Player::O);
        assert_eq!(board.cell_at(4), Ok(Cell::Marked(Player::O)));
        assert!(!board.is_empty(4));
        assert_eq!(board.count(Player::O), 1);
        assert_eq!(board.count(Player::X), 0);
    }

    #[test]
    fn test_parse_grid() {
        let board: Board = "X_O _X__O".parse().unwrap();
        assert_eq!(board.cell_at(0), Ok(Cell::Marked(Player::X)));
        assert_eq!(board.cell_at(1), Ok(Cell::Empty));
        assert_eq!(board.cell_at(3), Ok(Cell::Empty));
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
    }

    #[test]
    fn test_parse_grid_rejects_bad_input() {
        assert_eq!(
            "XO".parse::<Board>(),
            Err(GridParseError::WrongLength(2))
        );
        assert_eq!(
            "XO_XO_XOZ".parse::<Board>(),
            Err(GridParseError::InvalidSymbol('Z'))
        );
    }

    #[test]
    fn test_display_renders_bordered_grid() {
        let board: Board = "XOX_O____".parse().unwrap();
        let expected = "---------\n| X O X |\n|   O   |\n|       |\n---------";
        assert_eq!(board.to_string(), expected);
    }
}
