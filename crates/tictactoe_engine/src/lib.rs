//! Pure tic-tac-toe game engine.
//!
//! The engine owns the rules and nothing else: a nine-cell [`Board`], move
//! validation for raw coordinate text, and a classifier that maps any board to
//! exactly one [`GameState`]. Reading input and drawing the grid belong to the
//! caller, which drives a [`Session`] one move at a time.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{CoordinateOrder, GameState, Session};
//!
//! let mut session = Session::new(CoordinateOrder::RowCol);
//! for input in ["1 1", "2 2", "1 2", "2 1"] {
//!     assert_eq!(session.submit(input), Ok(GameState::NotFinished));
//! }
//! assert_eq!(session.submit("1 3"), Ok(GameState::XWins));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod coordinate;
mod rules;
mod session;
mod state;
mod types;

pub use action::Move;
pub use coordinate::Coordinate;
pub use rules::{
    CoordinateOrder, MoveError, WIN_LINES, apply_move, classify, has_empty_cells, is_possible,
    is_winner, parse_coordinates, validate_move,
};
pub use session::Session;
pub use state::GameState;
pub use types::{BOARD_SIZE, Board, BoardError, Cell, GridParseError, Player};
