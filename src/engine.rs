//! Engine entry point
//!
//! [`AIEngine`] owns the search strategy picked for its board size and turns
//! a board into the engine's next move:
//!
//! 1. **Size check**: the board must match the size the engine was built for
//! 2. **Search**: the strategy scores every candidate cell in row-major order
//! 3. **Opening**: on a board with no marks the pruned strategy has nothing
//!    to extend, so the engine takes the center
//! 4. **Full board**: reported as [`EngineError::NoMoveAvailable`]
//!
//! # Example
//!
//! ```
//! use tictactoe::{AIEngine, Board, Marker, Pos};
//!
//! let mut board = Board::new(3).unwrap();
//! board.set(Pos::new(0, 0), Marker::Player);
//! board.set(Pos::new(0, 1), Marker::Player);
//! board.set(Pos::new(1, 1), Marker::Engine);
//!
//! let mut engine = AIEngine::new(3, 5);
//! let pos = engine.choose_move(&mut board).unwrap();
//! assert_eq!(pos, Pos::new(0, 2));
//! ```

use std::time::Instant;

use tracing::debug;

use crate::board::{Board, Pos};
use crate::search::{SearchStrategy, Strategy};

pub use crate::error::EngineError;

/// Which path produced the move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Exhaustive minimax on a small board
    Minimax,
    /// Depth-bounded pruned search
    AlphaBeta,
    /// Center cell on a board with no marks yet
    Opening,
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Evaluation of the position after the move
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

/// Engine for one board size and depth setting.
///
/// The strategy is fixed at construction: exhaustive minimax up to 4x4,
/// pruned search above. The depth bound only applies to the pruned search.
#[derive(Debug, Clone)]
pub struct AIEngine {
    board_size: usize,
    max_depth: u32,
    pruning: bool,
    strategy: Strategy,
}

impl AIEngine {
    /// Create an engine with alpha-beta cutoffs enabled.
    #[must_use]
    pub fn new(board_size: usize, max_depth: u32) -> Self {
        Self::with_config(board_size, max_depth, true)
    }

    /// Create an engine with explicit pruning setting.
    ///
    /// # Example
    ///
    /// ```
    /// use tictactoe::{AIEngine, SearchType};
    ///
    /// let engine = AIEngine::with_config(10, 3, false);
    /// assert_eq!(engine.search_type(), SearchType::AlphaBeta);
    /// assert!(!engine.pruning());
    /// ```
    #[must_use]
    pub fn with_config(board_size: usize, max_depth: u32, pruning: bool) -> Self {
        Self {
            board_size,
            max_depth,
            pruning,
            strategy: Strategy::for_board_size(board_size, max_depth, pruning),
        }
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[must_use]
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Search type used when the strategy finds a move
    #[must_use]
    pub fn search_type(&self) -> SearchType {
        match self.strategy {
            Strategy::Minimax(_) => SearchType::Minimax,
            Strategy::AlphaBeta(_) => SearchType::AlphaBeta,
        }
    }

    /// Get the engine's next move.
    ///
    /// The board is mutated while searching and restored before returning.
    pub fn choose_move(&mut self, board: &mut Board) -> Result<Pos, EngineError> {
        self.choose_move_with_stats(board).map(|result| result.best_move)
    }

    /// Get the engine's next move with search statistics.
    pub fn choose_move_with_stats(&mut self, board: &mut Board) -> Result<MoveResult, EngineError> {
        if board.size() != self.board_size {
            return Err(EngineError::BoardSizeMismatch {
                expected: self.board_size,
                actual: board.size(),
            });
        }

        if board.is_full() {
            return Err(EngineError::NoMoveAvailable);
        }

        let start = Instant::now();
        let search = self.strategy.search(board);
        let time_ms = start.elapsed().as_millis() as u64;

        let result = match search.best_move {
            Some(best_move) => MoveResult {
                best_move,
                score: search.score,
                search_type: self.search_type(),
                time_ms,
                nodes: search.nodes,
            },
            // Not full and no frontier cell: nothing has been played yet
            None => MoveResult {
                best_move: board.center(),
                score: 0,
                search_type: SearchType::Opening,
                time_ms,
                nodes: search.nodes,
            },
        };

        debug!(
            pos = %result.best_move,
            score = result.score,
            search_type = ?result.search_type,
            nodes = result.nodes,
            time_ms = result.time_ms,
            "engine move"
        );

        Ok(result)
    }
}
