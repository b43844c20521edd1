//! Search module for the engine
//!
//! Contains:
//! - Plain exhaustive minimax for small boards
//! - Depth-bounded minimax with alpha-beta pruning, frontier move generation
//!   and a three-in-a-row threat bias for larger boards
//!
//! Both searchers work on the caller's board in place. Every trial move goes
//! through [`Board::with_marker`], so the board is back in its original state
//! when a search returns.

pub mod alphabeta;
pub mod minimax;

pub use alphabeta::AlphaBeta;
pub use minimax::Minimax;

use tracing::trace;

use crate::board::{Board, Marker, Pos};

/// Largest board side searched exhaustively. Bigger boards use [`AlphaBeta`].
pub const EXHAUSTIVE_MAX_SIZE: usize = 4;

/// Search result containing the best move found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, `None` when there was no candidate at all
    pub best_move: Option<Pos>,
    /// Evaluation of the position after the best move
    pub score: i32,
    /// Nodes visited by this search
    pub nodes: u64,
}

/// Row-major positions of a board with side `size`.
///
/// Does not borrow the board, so callers can mutate it while iterating.
#[inline]
pub(crate) fn scan_order(size: usize) -> impl Iterator<Item = Pos> {
    (0..size * size).map(move |idx| Pos::from_index(idx, size))
}

/// A way of scoring the engine's candidate moves.
pub trait SearchStrategy {
    /// Whether an empty cell is worth trying at all
    fn is_candidate(&self, board: &Board, pos: Pos) -> bool;

    /// Score the position reached right after the engine moved.
    /// Higher is better for the engine.
    fn evaluate(&mut self, board: &mut Board) -> i32;

    /// Total nodes visited since construction
    fn nodes(&self) -> u64;

    /// Try every candidate in row-major order and keep the one with the
    /// strictly greatest score, so ties go to the earliest cell.
    fn search(&mut self, board: &mut Board) -> SearchResult {
        let nodes_before = self.nodes();
        let mut best: Option<(Pos, i32)> = None;

        for pos in scan_order(board.size()) {
            if !board.is_empty(pos) || !self.is_candidate(board, pos) {
                continue;
            }

            let score = board.with_marker(pos, Marker::Engine, |b| self.evaluate(b));
            trace!(%pos, score, "root candidate");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        SearchResult {
            best_move: best.map(|(pos, _)| pos),
            score: best.map_or(0, |(_, score)| score),
            nodes: self.nodes() - nodes_before,
        }
    }
}

/// The closed set of strategies the engine can run
#[derive(Debug, Clone)]
pub enum Strategy {
    Minimax(Minimax),
    AlphaBeta(AlphaBeta),
}

impl Strategy {
    /// Exhaustive minimax up to [`EXHAUSTIVE_MAX_SIZE`], pruned search above.
    pub fn for_board_size(size: usize, depth: u32, pruning: bool) -> Self {
        if size > EXHAUSTIVE_MAX_SIZE {
            Strategy::AlphaBeta(AlphaBeta::with_pruning(depth, pruning))
        } else {
            Strategy::Minimax(Minimax::new())
        }
    }
}

impl SearchStrategy for Strategy {
    fn is_candidate(&self, board: &Board, pos: Pos) -> bool {
        match self {
            Strategy::Minimax(s) => s.is_candidate(board, pos),
            Strategy::AlphaBeta(s) => s.is_candidate(board, pos),
        }
    }

    fn evaluate(&mut self, board: &mut Board) -> i32 {
        match self {
            Strategy::Minimax(s) => s.evaluate(board),
            Strategy::AlphaBeta(s) => s.evaluate(board),
        }
    }

    fn nodes(&self) -> u64 {
        match self {
            Strategy::Minimax(s) => s.nodes(),
            Strategy::AlphaBeta(s) => s.nodes(),
        }
    }
}
