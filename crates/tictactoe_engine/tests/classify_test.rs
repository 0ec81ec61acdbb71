//! Tests for board classification over every possible board.

use tictactoe_engine::{
    BOARD_SIZE, Board, Cell, GameState, Player, WIN_LINES, classify, is_winner,
};

const CELL_VALUES: [Cell; 3] = [Cell::Empty, Cell::Marked(Player::X), Cell::Marked(Player::O)];

/// Decodes `n` in base 3 into a board, one digit per cell.
fn board_from_number(mut n: usize) -> Board {
    let mut cells = [Cell::Empty; BOARD_SIZE];
    for cell in cells.iter_mut() {
        *cell = CELL_VALUES[n % 3];
        n /= 3;
    }
    Board::from_cells(cells)
}

fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(BOARD_SIZE as u32)).map(board_from_number)
}

#[test]
fn test_classification_is_total_and_ordered() {
    let mut seen = 0;
    for board in all_boards() {
        let state = classify(&board);
        let x = board.count(Player::X);
        let o = board.count(Player::O);

        let expected = if x.abs_diff(o) >= 2 {
            GameState::Impossible
        } else if is_winner(&board, Player::X) {
            GameState::XWins
        } else if is_winner(&board, Player::O) {
            GameState::OWins
        } else if !board.cells().contains(&Cell::Empty) {
            GameState::Draw
        } else {
            GameState::NotFinished
        };
        assert_eq!(state, expected, "board:\n{board}");
        seen += 1;
    }
    assert_eq!(seen, 19_683);
}

#[test]
fn test_classification_is_repeatable() {
    for board in all_boards().step_by(97) {
        assert_eq!(classify(&board), classify(&board.clone()));
    }
}

#[test]
fn test_each_line_wins_for_x() {
    for line in WIN_LINES {
        // X holds the line, O sits on two cells outside it.
        let mut cells = [Cell::Empty; BOARD_SIZE];
        for i in line {
            cells[i] = Cell::Marked(Player::X);
        }
        for i in (0..BOARD_SIZE).filter(|i| !line.contains(i)).take(2) {
            cells[i] = Cell::Marked(Player::O);
        }
        assert_eq!(
            classify(&Board::from_cells(cells)),
            GameState::XWins,
            "{line:?}"
        );
    }
}

#[test]
fn test_each_line_wins_for_o() {
    for line in WIN_LINES {
        let mut cells = [Cell::Empty; BOARD_SIZE];
        for i in line {
            cells[i] = Cell::Marked(Player::O);
        }
        for i in (0..BOARD_SIZE).filter(|i| !line.contains(i)).take(2) {
            cells[i] = Cell::Marked(Player::X);
        }
        assert_eq!(
            classify(&Board::from_cells(cells)),
            GameState::OWins,
            "{line:?}"
        );
    }
}

#[test]
fn test_full_boards_without_line_are_draws() {
    let draws = all_boards()
        .filter(|b| !b.cells().contains(&Cell::Empty))
        .filter(|b| b.count(Player::X).abs_diff(b.count(Player::O)) < 2)
        .filter(|b| !is_winner(b, Player::X) && !is_winner(b, Player::O));

    let mut count = 0;
    for board in draws {
        assert_eq!(classify(&board), GameState::Draw, "board:\n{board}");
        count += 1;
    }
    assert!(count > 0);
}

#[test]
fn test_open_boards_without_line_not_finished() {
    let board: Board = "XO_OX_X_O".parse().unwrap();
    assert_eq!(classify(&board), GameState::NotFinished);
    let board: Board = "X_O______".parse().unwrap();
    assert_eq!(classify(&board), GameState::NotFinished);
}

#[test]
fn test_both_lines_report_x() {
    let board: Board = "XXX___OOO".parse().unwrap();
    assert_eq!(classify(&board), GameState::XWins);
}
