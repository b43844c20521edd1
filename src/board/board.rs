//! Square grid of markers with adjacency queries

use std::fmt;

use super::{Marker, Pos, MAX_BOARD_SIZE};
use crate::error::BoardError;

/// Offsets of the 8 neighbours at Chebyshev distance 1
const NEIGHBOURS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Game board of side `size`, one marker per cell in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Marker>,
}

impl Board {
    /// Create an empty board. Fails for a side of 0 or above [`MAX_BOARD_SIZE`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size == 0 || size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize {
                size,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self {
            size,
            cells: vec![Marker::Empty; size * size],
        })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reset every cell to `Empty`
    pub fn clear(&mut self) {
        self.cells.fill(Marker::Empty);
    }

    /// Get marker at position. Panics if `pos` is off the board.
    #[inline]
    pub fn get(&self, pos: Pos) -> Marker {
        self.cells[self.index(pos)]
    }

    /// Set marker at position. Panics if `pos` is off the board.
    #[inline]
    pub fn set(&mut self, pos: Pos, marker: Marker) {
        let idx = self.index(pos);
        self.cells[idx] = marker;
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Marker::Empty
    }

    /// Bounds test for signed coordinates
    #[inline]
    pub fn contains(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.size && (col as usize) < self.size
    }

    /// Marker at signed coordinates, `Empty` when off the board
    #[inline]
    pub fn get_or_empty(&self, row: i32, col: i32) -> Marker {
        if self.contains(row, col) {
            self.get(Pos::new(row as u8, col as u8))
        } else {
            Marker::Empty
        }
    }

    /// True iff any of the 8 neighbours of `pos` holds a mark
    pub fn has_adjacent_non_empty(&self, pos: Pos) -> bool {
        let (row, col) = (i32::from(pos.row), i32::from(pos.col));
        NEIGHBOURS
            .iter()
            .any(|&(dr, dc)| self.get_or_empty(row + dr, col + dc) != Marker::Empty)
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Marker::Empty)
    }

    /// Number of non-empty cells
    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m != Marker::Empty).count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&m| m == Marker::Empty)
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.cells.len()).map(move |idx| Pos::from_index(idx, self.size))
    }

    /// Empty positions in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, m)| **m == Marker::Empty)
            .map(move |(idx, _)| Pos::from_index(idx, self.size))
    }

    /// Middle cell (upper-left of the middle four on even sides)
    pub fn center(&self) -> Pos {
        let mid = ((self.size - 1) / 2) as u8;
        Pos::new(mid, mid)
    }

    /// Place `marker` at `pos` for the duration of `f`, then put back
    /// whatever was there before.
    ///
    /// All trial moves made by the searchers go through here, so the board
    /// handed to a search comes back exactly as it was.
    #[inline]
    pub fn with_marker<R>(&mut self, pos: Pos, marker: Marker, f: impl FnOnce(&mut Board) -> R) -> R {
        let prior = self.get(pos);
        self.set(pos, marker);
        let result = f(self);
        self.set(pos, prior);
        result
    }

    #[inline]
    fn index(&self, pos: Pos) -> usize {
        assert!(
            (pos.row as usize) < self.size && (pos.col as usize) < self.size,
            "position {pos} outside {0}x{0} board",
            self.size
        );
        pos.to_index(self.size)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.size {
            write!(f, "{col:2}")?;
        }
        writeln!(f)?;

        for row in 0..self.size {
            write!(f, "{row:2} ")?;
            for col in 0..self.size {
                write!(f, " {}", self.get(Pos::new(row as u8, col as u8)).symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
