//! Board structure with per-color bitboards

use std::fmt;

use super::bitboard::Bitboard;
use super::{Level, Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::error::GameError;

/// Game board: one bitboard per color plus the side length.
///
/// The side length is fixed at construction and never changes for the
/// life of the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    black: Bitboard,
    white: Bitboard,
}

impl Board {
    /// Create an empty board for a size preset
    pub fn new(level: Level) -> Self {
        Self {
            size: level.size(),
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Create an empty board with an explicit side length.
    ///
    /// Sizes below [`MIN_BOARD_SIZE`] can never produce a five-in-a-row;
    /// sizes above [`MAX_BOARD_SIZE`] exceed the bitboard capacity.
    pub fn with_size(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize { size });
        }
        Ok(Self {
            size,
            black: Bitboard::new(),
            white: Bitboard::new(),
        })
    }

    /// Side length
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.size * self.size
    }

    /// Check that both coordinates are within `0..size`
    #[inline]
    pub fn in_bounds(&self, pos: Pos) -> bool {
        (pos.row as usize) < self.size && (pos.col as usize) < self.size
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        debug_assert!(self.in_bounds(pos));
        pos.to_index(self.size)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        let idx = self.index(pos);
        if self.black.get(idx) {
            Stone::Black
        } else if self.white.get(idx) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        let idx = self.index(pos);
        !self.black.get(idx) && !self.white.get(idx)
    }

    /// Place a stone
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        let idx = self.index(pos);
        match stone {
            Stone::Black => self.black.set(idx),
            Stone::White => self.white.set(idx),
            Stone::Empty => {}
        }
    }

    /// Remove a stone
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        let idx = self.index(pos);
        self.black.clear(idx);
        self.white.clear(idx);
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if every cell is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == self.total_cells()
    }

    /// Remove all stones, keeping the size
    pub fn clear(&mut self) {
        self.black = Bitboard::new();
        self.white = Bitboard::new();
    }

    /// Positions of all stones of a color, in row-major order
    pub fn stones(&self, stone: Stone) -> Vec<Pos> {
        let bits = match stone {
            Stone::Black => &self.black,
            Stone::White => &self.white,
            Stone::Empty => return Vec::new(),
        };
        bits.iter_ones()
            .map(|idx| Pos::from_index(idx, self.size))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Level::Basic)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..self.size {
            write!(f, "{:2}", c)?;
        }
        writeln!(f)?;

        for r in 0..self.size {
            write!(f, "{:2} ", r)?;
            for c in 0..self.size {
                let ch = match self.get(Pos::new(r as u8, c as u8)) {
                    Stone::Black => " X",
                    Stone::White => " O",
                    Stone::Empty => " .",
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
