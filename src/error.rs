//! Error types for human input

use thiserror::Error;

/// Rejected human move. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Game is over")]
    GameOver,

    #[error("Not your turn")]
    NotYourTurn,

    #[error("Cell {0} is already taken")]
    CellOccupied(usize),

    #[error("Cell {0} is off the board")]
    OutOfRange(usize),
}
