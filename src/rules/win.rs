//! Win condition checking
//!
//! A mark wins by holding all three cells of a row, column or diagonal.

use crate::board::{Board, Mark};

/// The 8 winning lines as cell index triples: rows, columns, diagonals.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Bit masks of `WIN_PATTERNS`, same order
pub const WIN_MASKS: [u16; 8] = {
    let mut masks = [0u16; 8];
    let mut i = 0;
    while i < WIN_PATTERNS.len() {
        let [a, b, c] = WIN_PATTERNS[i];
        masks[i] = (1 << a) | (1 << b) | (1 << c);
        i += 1;
    }
    masks
};

/// Check whether `mark` holds any complete winning line.
///
/// Empty cells never match a mark, so a line with a gap never counts.
#[inline]
pub fn has_winner(board: &Board, mark: Mark) -> bool {
    let marks = board.marks(mark);
    WIN_MASKS.iter().any(|&mask| marks.contains(mask))
}

/// Find the first winning line held by `mark`, in `WIN_PATTERNS` order.
pub fn winning_line(board: &Board, mark: Mark) -> Option<[usize; 3]> {
    let marks = board.marks(mark);
    WIN_MASKS
        .iter()
        .position(|&mask| marks.contains(mask))
        .map(|i| WIN_PATTERNS[i])
}

/// Check for a winner
///
/// Returns `Some(mark)` if either side holds a line, `None` otherwise.
/// X is checked first; with alternating play at most one side can win.
pub fn check_winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| has_winner(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_top_row_win() {
        let b = board("XXX......");
        assert!(has_winner(&b, Mark::X));
        assert!(!has_winner(&b, Mark::O));
    }

    #[test]
    fn test_column_win() {
        let b = board("O.X/O.X/OX.");
        assert!(has_winner(&b, Mark::O));
        assert_eq!(winning_line(&b, Mark::O), Some([0, 3, 6]));
    }

    #[test]
    fn test_diagonal_wins() {
        assert!(has_winner(&board("X...X...X"), Mark::X));
        assert_eq!(winning_line(&board("..O.O.O.."), Mark::O), Some([2, 4, 6]));
    }

    #[test]
    fn test_two_in_row_not_win() {
        let b = board("XX.OO....");
        assert!(!has_winner(&b, Mark::X));
        assert!(!has_winner(&b, Mark::O));
        assert_eq!(check_winner(&b), None);
    }

    #[test]
    fn test_mixed_line_not_win() {
        let b = board("XOX......");
        assert!(!has_winner(&b, Mark::X));
        assert!(winning_line(&b, Mark::X).is_none());
    }

    #[test]
    fn test_empty_board_no_winner() {
        let b = Board::new();
        assert!(!has_winner(&b, Mark::X));
        assert!(!has_winner(&b, Mark::O));
    }

    #[test]
    fn test_check_winner() {
        assert_eq!(check_winner(&board("OOO.XX.X.")), Some(Mark::O));
        assert_eq!(check_winner(&board("XO.XO.X..")), Some(Mark::X));
    }

    #[test]
    fn test_masks_match_patterns() {
        for (mask, pattern) in WIN_MASKS.iter().zip(WIN_PATTERNS.iter()) {
            assert_eq!(mask.count_ones(), 3);
            for &idx in pattern {
                assert_ne!(mask & (1 << idx), 0);
            }
        }
    }
}
