//! Plain exhaustive minimax
//!
//! No depth bound, no move filtering and no pruning: every empty cell is
//! tried at every level until someone wins or the board fills up. Only
//! suitable for boards small enough that the whole game tree fits in a
//! search.

use crate::board::{Board, Marker, Pos};
use crate::rules::check_winner;

use super::{scan_order, SearchStrategy};

/// Score of a position the engine has won
pub const WIN_SCORE: i32 = 10;

/// Exhaustive minimax searcher
#[derive(Debug, Clone, Default)]
pub struct Minimax {
    nodes: u64,
}

impl Minimax {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Game-theoretic value of `board` with `maximizing` telling whether the
    /// engine is to move. +10 engine win, -10 player win, 0 draw.
    pub fn minimax(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        self.nodes += 1;

        if let Some(winner) = check_winner(board) {
            return if winner == Marker::Engine {
                WIN_SCORE
            } else {
                -WIN_SCORE
            };
        }

        if board.is_full() {
            return 0;
        }

        let marker = if maximizing {
            Marker::Engine
        } else {
            Marker::Player
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in scan_order(board.size()) {
            if !board.is_empty(pos) {
                continue;
            }
            let value = board.with_marker(pos, marker, |b| self.minimax(b, !maximizing));
            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        best
    }
}

impl SearchStrategy for Minimax {
    fn is_candidate(&self, _board: &Board, _pos: Pos) -> bool {
        true
    }

    fn evaluate(&mut self, board: &mut Board) -> i32 {
        self.minimax(board, false)
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }
}
