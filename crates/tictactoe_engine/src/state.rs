//! Outcome of classifying a board.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Result of classifying a board.
///
/// Every board maps to exactly one variant, including boards that alternating
/// play can never produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameState {
    /// X completed a line.
    #[display("X wins")]
    XWins,
    /// O completed a line.
    #[display("O wins")]
    OWins,
    /// Board is full with no completed line.
    #[display("Draw")]
    Draw,
    /// Empty cells remain and nobody has won.
    #[display("Game not finished")]
    NotFinished,
    /// Mark counts differ by two or more.
    #[display("Impossible")]
    Impossible,
}

impl GameState {
    /// Returns true for every state except [`GameState::NotFinished`].
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::NotFinished)
    }
}
