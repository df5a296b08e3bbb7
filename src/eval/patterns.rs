//! Score constants for tic-tac-toe evaluation
//!
//! Scores are from the computer's point of view: positive favors the
//! computer, negative favors the human.

/// Evaluation scores
pub struct Score;

impl Score {
    /// Completed line
    pub const WIN: i32 = 10;
    /// Center cell held
    pub const CENTER: i32 = 5;
    /// Each edge cell held
    pub const EDGE: i32 = 1;
}

/// Bound for alpha-beta windows. Exceeds every score `evaluate` can return.
pub const INF: i32 = Score::WIN + 1;
