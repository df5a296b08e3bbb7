//! Board structure: one bitboard per mark

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::bitboard::Bitboard;
use super::{Mark, Pos, BOARD_SIZE, TOTAL_CELLS};

/// Game board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// X marks bitboard
    pub x: Bitboard,
    /// O marks bitboard
    pub o: Bitboard,
}

/// Error returned when parsing a board string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBoardError {
    #[error("expected 9 cells, got {0}")]
    WrongLength(usize),

    #[error("invalid cell character '{0}' (expected 'X', 'O' or '.')")]
    InvalidCell(char),
}

impl Board {
    pub fn new() -> Self {
        Self {
            x: Bitboard::new(),
            o: Bitboard::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get the mark at a cell index
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Mark> {
        if self.x.get(idx) {
            Some(Mark::X)
        } else if self.o.get(idx) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Get the mark at a position
    #[inline]
    pub fn at(&self, pos: Pos) -> Option<Mark> {
        self.get(pos.to_index())
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_empty(&self, idx: usize) -> bool {
        !self.x.get(idx) && !self.o.get(idx)
    }

    /// Place a mark. The caller checks that the cell is empty.
    #[inline]
    pub fn place(&mut self, idx: usize, mark: Mark) {
        debug_assert!(self.is_empty(idx), "cell {idx} already occupied");
        match mark {
            Mark::X => self.x.set(idx),
            Mark::O => self.o.set(idx),
        }
    }

    /// Clear a cell
    #[inline]
    pub fn remove(&mut self, idx: usize) {
        self.x.clear(idx);
        self.o.clear(idx);
    }

    /// Get the bitboard for a mark
    #[inline]
    pub fn marks(&self, mark: Mark) -> &Bitboard {
        match mark {
            Mark::X => &self.x,
            Mark::O => &self.o,
        }
    }

    /// Bitboard of empty cells
    #[inline]
    pub fn empty(&self) -> Bitboard {
        self.x.union(self.o).complement()
    }

    /// Total marks on board
    #[inline]
    pub fn mark_count(&self) -> u32 {
        self.x.count() + self.o.count()
    }

    /// Check if the whole board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.x.is_empty() && self.o.is_empty()
    }

    /// Cell contents in index order
    pub fn cells(&self) -> [Option<Mark>; TOTAL_CELLS] {
        std::array::from_fn(|idx| self.get(idx))
    }

    /// Clear every cell
    pub fn clear(&mut self) {
        *self = Board::new();
    }
}

/// Renders the board as a compact 9-character string, e.g. `XO..X...O`.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in self.cells() {
            let c = cell.map_or('.', Mark::symbol);
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

/// Parses `X`, `O` and `.` cells (lowercase accepted). Whitespace and `/`
/// row separators are ignored, so `"XO./.X./..O"` is valid.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .collect();
        if cells.len() != TOTAL_CELLS {
            return Err(ParseBoardError::WrongLength(cells.len()));
        }

        let mut board = Board::new();
        for (idx, c) in cells.into_iter().enumerate() {
            match c {
                'X' | 'x' => board.place(idx, Mark::X),
                'O' | 'o' => board.place(idx, Mark::O),
                '.' | '-' | '_' => {}
                other => return Err(ParseBoardError::InvalidCell(other)),
            }
        }
        Ok(board)
    }
}

/// Multi-line grid rendering for terminal output
pub struct Grid<'a>(pub &'a Board);

impl fmt::Display for Grid<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            let line: Vec<String> = (0..BOARD_SIZE)
                .map(|col| {
                    let c = self.0.at(Pos::new(row as u8, col as u8)).map_or(' ', Mark::symbol);
                    format!(" {c} ")
                })
                .collect();
            writeln!(f, "{}", line.join("|"))?;
        }
        Ok(())
    }
}
