//! Board representation for N-in-a-row

pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::Board;

/// Largest supported side length (positions are stored as `u8`)
pub const MAX_BOARD_SIZE: usize = 19;

/// Cell markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Marker {
    #[default]
    Empty,
    /// The human player's mark (X)
    Player,
    /// The engine's own mark (O)
    Engine,
}

impl Marker {
    /// Get the other side's marker
    #[inline]
    pub fn opponent(self) -> Marker {
        match self {
            Marker::Player => Marker::Engine,
            Marker::Engine => Marker::Player,
            Marker::Empty => Marker::Empty,
        }
    }

    /// Character used when printing a board
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Marker::Empty => '.',
            Marker::Player => 'X',
            Marker::Engine => 'O',
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < MAX_BOARD_SIZE && (col as usize) < MAX_BOARD_SIZE);
        Self { row, col }
    }

    /// Row-major index on a board of the given side length
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major order, matching the scan order of every board query
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
