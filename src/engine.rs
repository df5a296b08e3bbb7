//! Computer player integrating the search with timing and logging
//!
//! The engine owns a [`Searcher`] for the computer's mark and runs one full
//! root search per move. Each call reports the chosen cell together with the
//! score, node count and elapsed time, which the UI shows in its stats panel.
//!
//! # Example
//!
//! ```
//! use tictactoe::{AiEngine, Board, Mark};
//!
//! let mut engine = AiEngine::new(Mark::O);
//! let board: Board = "X........".parse().unwrap();
//!
//! let result = engine.get_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Board, Mark};
use crate::search::{SearchResult, Searcher};

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` if the board was already decided
    pub best_move: Option<usize>,
    /// Evaluation score, computer-positive
    pub score: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64, nodes: u64, cutoffs: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes,
            cutoffs,
        }
    }
}

/// Computer opponent. Always plays at full strength.
#[derive(Debug, Clone)]
pub struct AiEngine {
    searcher: Searcher,
}

impl AiEngine {
    /// Create an engine playing `computer`.
    #[must_use]
    pub fn new(computer: Mark) -> Self {
        Self {
            searcher: Searcher::new(computer),
        }
    }

    /// The mark this engine plays
    #[inline]
    pub fn computer(&self) -> Mark {
        self.searcher.computer()
    }

    /// Get the best move for the computer.
    ///
    /// Convenience wrapper around [`AiEngine::get_move_with_stats`].
    #[must_use]
    pub fn get_move(&mut self, board: &Board) -> Option<usize> {
        self.get_move_with_stats(board).best_move
    }

    /// Search the position with the computer to move.
    ///
    /// The board is not modified. A board with a winner or no empty cell
    /// returns `best_move: None`.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();
        let computer = self.computer();

        self.searcher.reset_stats();
        let result = self.searcher.search(board, computer);
        let stats = self.searcher.stats();
        let time_ms = start.elapsed().as_millis() as u64;

        match result.best_move {
            Some(mov) => info!(
                board = %board,
                mark = %computer,
                mov,
                score = result.score,
                nodes = stats.nodes,
                cutoffs = stats.cutoffs,
                time_ms,
                "computer move selected"
            ),
            None => debug!(board = %board, score = result.score, "no move available"),
        }

        MoveResult::from_search(result, time_ms, stats.nodes, stats.cutoffs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Score;

    #[test]
    fn test_engine_creation() {
        let engine = AiEngine::new(Mark::O);
        assert_eq!(engine.computer(), Mark::O);
    }

    #[test]
    fn test_engine_blocks_opponent_win() {
        let mut engine = AiEngine::new(Mark::O);
        let board: Board = "XX..O....".parse().unwrap();
        assert_eq!(engine.get_move(&board), Some(2));
    }

    #[test]
    fn test_engine_empty_board() {
        let mut engine = AiEngine::new(Mark::X);
        let result = engine.get_move_with_stats(&Board::new());
        assert_eq!(result.best_move, Some(4));
        assert_eq!(result.score, Score::CENTER);
        assert!(result.nodes > 0);
        assert!(result.cutoffs > 0);
    }

    #[test]
    fn test_engine_stats_are_per_call() {
        let mut engine = AiEngine::new(Mark::O);
        let board: Board = "X........".parse().unwrap();
        let first = engine.get_move_with_stats(&board);
        let second = engine.get_move_with_stats(&board);
        assert_eq!(first.nodes, second.nodes);
        assert_eq!(first.best_move, second.best_move);
    }

    #[test]
    fn test_engine_full_board() {
        let mut engine = AiEngine::new(Mark::O);
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let result = engine.get_move_with_stats(&board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_engine_does_not_modify_board() {
        let mut engine = AiEngine::new(Mark::O);
        let board: Board = "X...O...X".parse().unwrap();
        let before = board;
        let _ = engine.get_move(&board);
        assert_eq!(board, before);
    }
}
