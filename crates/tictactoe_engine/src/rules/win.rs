//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player};
use tracing::instrument;

/// The eight index triples that win the game when uniformly marked.
pub const WIN_LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks whether `player` holds every cell of at least one win line.
#[instrument(skip(board))]
pub fn is_winner(board: &Board, player: Player) -> bool {
    let cells = board.cells();
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&i| cells[i] == Cell::Marked(player)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BOARD_SIZE;

    fn board_with_line(line: [usize; 3], player: Player) -> Board {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        for i in line {
            cells[i] = Cell::Marked(player);
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!is_winner(&board, Player::X));
        assert!(!is_winner(&board, Player::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in WIN_LINES {
            for player in [Player::X, Player::O] {
                let board = board_with_line(line, player);
                assert!(is_winner(&board, player), "{line:?} should win for {player}");
                assert!(!is_winner(&board, player.toggle()));
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX_______".parse().unwrap();
        assert!(!is_winner(&board, Player::X));
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board: Board = "XOX______".parse().unwrap();
        assert!(!is_winner(&board, Player::X));
        assert!(!is_winner(&board, Player::O));
    }
}
