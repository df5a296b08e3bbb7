//! Bitboard implementation for fast line matching

use super::TOTAL_CELLS;

/// Mask covering all 9 cells
pub const FULL_MASK: u16 = (1 << TOTAL_CELLS) - 1;

/// Bitboard over the 9 cells of a tic-tac-toe board.
/// Bit `i` is set when cell `i` (row-major) holds the owner's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: u16,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Build from a raw mask (bits above the 9th are dropped)
    pub const fn from_bits(bits: u16) -> Self {
        Self { bits: bits & FULL_MASK }
    }

    #[inline]
    pub fn bits(&self) -> u16 {
        self.bits
    }

    /// Set the bit for a cell index
    #[inline]
    pub fn set(&mut self, idx: usize) {
        debug_assert!(idx < TOTAL_CELLS);
        self.bits |= 1 << idx;
    }

    /// Clear the bit for a cell index
    #[inline]
    pub fn clear(&mut self, idx: usize) {
        debug_assert!(idx < TOTAL_CELLS);
        self.bits &= !(1 << idx);
    }

    /// Check if the bit for a cell index is set
    #[inline]
    pub fn get(&self, idx: usize) -> bool {
        idx < TOTAL_CELLS && (self.bits >> idx) & 1 == 1
    }

    /// True when every bit of `mask` is set
    #[inline]
    pub fn contains(&self, mask: u16) -> bool {
        self.bits & mask == mask
    }

    /// Count set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Union of two bitboards
    #[inline]
    pub fn union(self, other: Bitboard) -> Bitboard {
        Bitboard { bits: self.bits | other.bits }
    }

    /// Cells not set in this bitboard
    #[inline]
    pub fn complement(self) -> Bitboard {
        Bitboard { bits: !self.bits & FULL_MASK }
    }

    /// Iterate over set cell indices in ascending order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

/// Iterator over set bits in a Bitboard, lowest index first
pub struct BitboardIter {
    bits: u16,
}

impl Iterator for BitboardIter {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        Some(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_clear_get() {
        let mut bb = Bitboard::new();
        bb.set(0);
        bb.set(8);
        assert!(bb.get(0));
        assert!(bb.get(8));
        assert!(!bb.get(4));
        assert_eq!(bb.count(), 2);

        bb.clear(0);
        assert!(!bb.get(0));
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn test_iter_ones_ascending() {
        let bb = Bitboard::from_bits(0b1_0101_0010);
        let cells: Vec<usize> = bb.iter_ones().collect();
        assert_eq!(cells, vec![1, 4, 6, 8]);
    }

    #[test]
    fn test_complement_stays_in_board() {
        let bb = Bitboard::from_bits(0b0_0000_0111);
        let rest = bb.complement();
        assert_eq!(rest.count(), 6);
        assert_eq!(rest.iter_ones().next(), Some(3));
        assert!(bb.union(rest).contains(FULL_MASK));
    }

    #[test]
    fn test_from_bits_masks_high_bits() {
        let bb = Bitboard::from_bits(0xFFFF);
        assert_eq!(bb.count(), 9);
        assert!(!bb.get(9));
    }
}
