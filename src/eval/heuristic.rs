//! Static evaluation of tic-tac-toe positions
//!
//! Used by the search only at cutoff nodes (depth cap reached, a line
//! completed, or the board full). Three rules are tried in order and the
//! first one that applies decides the score:
//! 1. A completed line: `±Score::WIN`
//! 2. The center cell held: `±Score::CENTER`
//! 3. Otherwise the edge balance: `Score::EDGE` per edge held, computer minus human

use crate::board::{Board, Mark, CENTER, EDGES};
use crate::rules::WIN_MASKS;

use super::patterns::Score;

/// Evaluate the board with a fixed sign convention.
///
/// `computer` is the mark that scores positively regardless of whose turn it
/// is; the other mark is the human's and scores negatively.
///
/// # Returns
/// One of `±Score::WIN`, `±Score::CENTER`, or an edge sum in `-4..=4`
#[must_use]
pub fn evaluate(board: &Board, computer: Mark) -> i32 {
    let human = computer.opponent();
    let mine = board.marks(computer);
    let theirs = board.marks(human);

    // First completed pattern decides
    for &mask in &WIN_MASKS {
        if mine.contains(mask) {
            return Score::WIN;
        }
        if theirs.contains(mask) {
            return -Score::WIN;
        }
    }

    match board.get(CENTER) {
        Some(m) if m == computer => return Score::CENTER,
        Some(_) => return -Score::CENTER,
        None => {}
    }

    evaluate_edges(board, computer)
}

/// Edge balance: computer's edges minus human's edges
fn evaluate_edges(board: &Board, computer: Mark) -> i32 {
    EDGES
        .iter()
        .map(|&idx| match board.get(idx) {
            Some(m) if m == computer => Score::EDGE,
            Some(_) => -Score::EDGE,
            None => 0,
        })
        .sum()
}
