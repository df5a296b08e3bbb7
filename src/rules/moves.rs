//! Move legality and board fill queries

use crate::board::{Board, TOTAL_CELLS};

/// All empty cell indices in ascending order.
///
/// The search iterates candidates in this order, which fixes its tie-break.
pub fn empty_cells(board: &Board) -> Vec<usize> {
    board.empty().iter_ones().collect()
}

/// True iff no cell is empty
#[inline]
pub fn is_full(board: &Board) -> bool {
    board.empty().is_empty()
}

/// Check if a mark may be placed at `idx`: in range and unoccupied.
#[inline]
pub fn is_valid_move(board: &Board, idx: usize) -> bool {
    idx < TOTAL_CELLS && board.is_empty(idx)
}
