//! Minimax search with alpha-beta pruning and a depth cap
//!
//! The computer's mark is the maximizing side and its opponent the minimizing
//! side. Scores come from [`evaluate`] with the computer as the positive
//! perspective, so the sign convention never flips between plies.
//!
//! # Features
//!
//! - Depth cap of [`MAX_DEPTH`] plies with heuristic evaluation at the cutoff
//! - Candidates tried in ascending cell order; ties keep the first move found
//! - In-place make/unmake on the caller's board
//! - Optional exhaustive mode (no pruning) for verification
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Mark};
//! use tictactoe::eval::INF;
//! use tictactoe::search::Searcher;
//!
//! let mut board: Board = "XX..O....".parse().unwrap();
//! let mut searcher = Searcher::new(Mark::O);
//!
//! let result = searcher.best_move(&mut board, Mark::O, 0, -INF, INF);
//! assert_eq!(result.best_move, Some(2)); // block the top row
//! ```

use crate::board::{Board, Mark};
use crate::eval::{evaluate, INF};
use crate::rules::{has_winner, is_full};

/// Search depth cap in plies
pub const MAX_DEPTH: u8 = 6;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total nodes visited (including cutoff nodes)
    pub nodes: u64,
    /// Nodes scored by the static evaluation
    pub leaves: u64,
    /// Sibling loops stopped early by `beta <= alpha`
    pub cutoffs: u64,
}

/// Search result: score of the position and the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Evaluation score, computer-positive
    pub score: i32,
    /// Best cell index, `None` at cutoff nodes
    pub best_move: Option<usize>,
}

impl SearchResult {
    #[inline]
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// Minimax searcher for a fixed computer mark.
#[derive(Debug, Clone)]
pub struct Searcher {
    computer: Mark,
    pruning: bool,
    stats: SearchStats,
}

impl Searcher {
    /// Create an alpha-beta searcher playing `computer`.
    #[must_use]
    pub fn new(computer: Mark) -> Self {
        Self {
            computer,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Create a plain minimax searcher that never prunes.
    ///
    /// Returns the same moves as [`Searcher::new`] while visiting every node;
    /// used to check the pruning.
    #[must_use]
    pub fn exhaustive(computer: Mark) -> Self {
        Self {
            pruning: false,
            ..Self::new(computer)
        }
    }

    /// The maximizing mark
    #[inline]
    pub fn computer(&self) -> Mark {
        self.computer
    }

    /// Statistics accumulated since creation or the last [`Searcher::reset_stats`]
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = SearchStats::default();
    }

    /// Root search: best move for `mark` on a copy of `board`.
    ///
    /// Equivalent to `best_move(board, mark, 0, -INF, INF)`.
    #[must_use]
    pub fn search(&mut self, board: &Board, mark: Mark) -> SearchResult {
        let mut work_board = *board;
        self.best_move(&mut work_board, mark, 0, -INF, INF)
    }

    /// Depth-limited minimax with alpha-beta pruning.
    ///
    /// `mark` is the side to move. The board is mutated while searching and
    /// restored before returning. A board that already has a winner or no
    /// empty cell yields `best_move: None` with its static score.
    pub fn best_move(
        &mut self,
        board: &mut Board,
        mark: Mark,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> SearchResult {
        self.stats.nodes += 1;

        if depth >= MAX_DEPTH
            || has_winner(board, Mark::X)
            || has_winner(board, Mark::O)
            || is_full(board)
        {
            self.stats.leaves += 1;
            return SearchResult::leaf(evaluate(board, self.computer));
        }

        let maximizing = mark == self.computer;
        let mut best = SearchResult::leaf(if maximizing { -INF } else { INF });

        for mov in board.empty().iter_ones() {
            board.place(mov, mark);
            let child = self.best_move(board, mark.opponent(), depth + 1, alpha, beta);
            board.remove(mov);

            // Strict improvement only: the first move reaching a score keeps it
            if maximizing {
                if child.score > best.score {
                    best = SearchResult {
                        score: child.score,
                        best_move: Some(mov),
                    };
                }
                alpha = alpha.max(child.score);
            } else {
                if child.score < best.score {
                    best = SearchResult {
                        score: child.score,
                        best_move: Some(mov),
                    };
                }
                beta = beta.min(child.score);
            }

            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }
}
