//! Depth-bounded minimax with alpha-beta pruning
//!
//! Used on boards larger than [`super::EXHAUSTIVE_MAX_SIZE`], where the full
//! game tree is out of reach.
//!
//! # Features
//!
//! - Frontier move generation: only empty cells next to an existing mark are
//!   tried, at the root and at every inner level
//! - Terminal scores of ±1000, with the ply number added on the way up so a
//!   quick win beats a slow one and a slow loss beats a quick one
//! - Threat bias: a three-in-a-row on the board adds ±100 to every value
//!   returned below that node, so the search chases its own threats and
//!   answers the opponent's before they turn into a five
//! - Alpha-beta pruning that returns exactly the values of the unpruned
//!   search at the root
//!
//! # Example
//!
//! ```
//! use tictactoe::board::{Board, Marker, Pos};
//! use tictactoe::search::{AlphaBeta, SearchStrategy};
//!
//! let mut board = Board::new(6).unwrap();
//! board.set(Pos::new(2, 2), Marker::Player);
//!
//! let mut searcher = AlphaBeta::new(2);
//! let result = searcher.search(&mut board);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Marker, Pos};
use crate::rules::{check_threat_sequence, check_winner};

use super::{scan_order, SearchStrategy};

/// Score of a position the engine has won
pub const WIN_SCORE: i32 = 1000;

/// Bias for a three-in-a-row that has not yet become a win
pub const THREAT_BIAS: i32 = 100;

/// Bound for the alpha-beta window, far outside any reachable score
const INF: i32 = 1_000_000;

/// Pruned, depth-bounded searcher
#[derive(Debug, Clone)]
pub struct AlphaBeta {
    max_depth: u32,
    pruning: bool,
    nodes: u64,
}

impl AlphaBeta {
    /// Create a searcher exploring `max_depth` plies below the engine's move.
    #[must_use]
    pub fn new(max_depth: u32) -> Self {
        Self::with_pruning(max_depth, true)
    }

    /// Create a searcher with alpha-beta cutoffs switched on or off.
    ///
    /// Both settings return the same root values; the unpruned form exists
    /// to check exactly that.
    #[must_use]
    pub fn with_pruning(max_depth: u32, pruning: bool) -> Self {
        Self {
            max_depth,
            pruning,
            nodes: 0,
        }
    }

    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[must_use]
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Score `board` at ply `depth`.
    ///
    /// `threat` is the bias inherited from the parent; it is replaced when a
    /// three-in-a-row is found on this board.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: u32,
        maximizing: bool,
        alpha: i32,
        beta: i32,
        threat: i32,
    ) -> i32 {
        self.nodes += 1;

        // Depth cutoff is neutral, there is no static evaluation
        if depth >= self.max_depth {
            return 0;
        }

        if let Some(winner) = check_winner(board) {
            return if winner == Marker::Engine {
                WIN_SCORE
            } else {
                -WIN_SCORE
            };
        }

        let threat = match check_threat_sequence(board) {
            Some(Marker::Engine) => THREAT_BIAS,
            Some(Marker::Player) => -THREAT_BIAS,
            _ => threat,
        };

        if board.is_full() {
            return 0;
        }

        // The node returns best child + offset. Shift the window into child
        // space so cutoffs compare like with like.
        let offset = if maximizing {
            depth as i32 + threat
        } else {
            threat - depth as i32
        };
        let mut alpha = alpha - offset;
        let mut beta = beta - offset;

        let marker = if maximizing {
            Marker::Engine
        } else {
            Marker::Player
        };
        let mut best: Option<i32> = None;

        for pos in scan_order(board.size()) {
            if !board.is_empty(pos) || !board.has_adjacent_non_empty(pos) {
                continue;
            }

            let value = board.with_marker(pos, marker, |b| {
                self.alpha_beta(b, depth + 1, !maximizing, alpha, beta, threat)
            });

            if maximizing {
                let b = best.map_or(value, |b| b.max(value));
                best = Some(b);
                alpha = alpha.max(b);
            } else {
                let b = best.map_or(value, |b| b.min(value));
                best = Some(b);
                beta = beta.min(b);
            }

            if self.pruning && beta <= alpha {
                break;
            }
        }

        // A non-full board with at least one mark always has a frontier cell
        best.map_or(0, |value| value + offset)
    }
}

impl SearchStrategy for AlphaBeta {
    fn is_candidate(&self, board: &Board, pos: Pos) -> bool {
        board.has_adjacent_non_empty(pos)
    }

    fn evaluate(&mut self, board: &mut Board) -> i32 {
        self.alpha_beta(board, 0, false, -INF, INF, 0)
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len()).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let marker = match ch {
                    'X' => Marker::Player,
                    'O' => Marker::Engine,
                    _ => Marker::Empty,
                };
                board.set(Pos::new(r as u8, c as u8), marker);
            }
        }
        board
    }

    /// Root scores of every frontier candidate, in scan order
    fn root_scores(searcher: &mut AlphaBeta, board: &mut Board) -> Vec<(Pos, i32)> {
        let mut scores = Vec::new();
        for pos in scan_order(board.size()) {
            if board.is_empty(pos) && searcher.is_candidate(board, pos) {
                let score = board.with_marker(pos, Marker::Engine, |b| searcher.evaluate(b));
                scores.push((pos, score));
            }
        }
        scores
    }

    #[test]
    fn test_depth_zero_is_neutral() {
        let mut board = board_from(&["OOOO.", ".....", "XXXX.", ".....", "....."]);
        let mut searcher = AlphaBeta::new(0);
        for (_, score) in root_scores(&mut searcher, &mut board) {
            assert_eq!(score, 0);
        }
    }

    #[test]
    fn test_immediate_win_scores_full() {
        let mut board = board_from(&["OOOO.", ".....", "XXXX.", ".....", "....."]);
        let mut searcher = AlphaBeta::new(1);
        let result = searcher.search(&mut board);
        assert_eq!(result.best_move, Some(Pos::new(0, 4)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_four() {
        // Player has four on row 2 with (2, 4) open; the engine has nothing
        let mut board = board_from(&[
            "......",
            "......",
            "XXXX..",
            ".O....",
            "......",
            "......",
        ]);
        let before = board.clone();
        let result = AlphaBeta::new(2).search(&mut board);
        assert_eq!(result.best_move, Some(Pos::new(2, 4)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_faster_win_scores_higher() {
        // One engine move wins now; the same win two plies later is worth less
        let mut searcher = AlphaBeta::new(4);

        let mut now = board_from(&["OOOO.", ".....", "X.X.X", ".....", "X...."]);
        let immediate = searcher.search(&mut now).score;

        let mut later = board_from(&["OOO..", ".....", "X.X.X", ".....", "X...."]);
        let delayed = searcher.search(&mut later).score;

        assert_eq!(immediate, WIN_SCORE);
        assert!(delayed < immediate);
    }

    #[test]
    fn test_threat_bias_applies() {
        // Engine three-in-a-row on a 6x6 board: every root value carries +100
        let mut board = board_from(&[
            "......",
            ".OOO..",
            "......",
            "......",
            "....X.",
            "...X..",
        ]);
        let mut searcher = AlphaBeta::new(2);
        for (pos, score) in root_scores(&mut searcher, &mut board) {
            assert!(score >= THREAT_BIAS - 2, "{pos} scored {score}");
        }
    }

    #[test]
    fn test_pruning_preserves_root_values() {
        let boards = [
            board_from(&[
                "......",
                "..X...",
                "..OX..",
                "...O..",
                "......",
                "......",
            ]),
            board_from(&[".....", ".XO..", ".OX..", "..X..", "....."]),
            board_from(&[
                "......",
                ".XXX..",
                ".O.O..",
                "......",
                "......",
                "......",
            ]),
        ];

        for board in boards {
            let mut pruned_board = board.clone();
            let mut plain_board = board.clone();

            let mut pruned = AlphaBeta::with_pruning(3, true);
            let mut plain = AlphaBeta::with_pruning(3, false);

            let pruned_scores = root_scores(&mut pruned, &mut pruned_board);
            let plain_scores = root_scores(&mut plain, &mut plain_board);
            assert_eq!(pruned_scores, plain_scores, "\n{board}");
            assert!(pruned.nodes() <= plain.nodes());

            let mut a = board.clone();
            let mut b = board.clone();
            assert_eq!(
                AlphaBeta::with_pruning(3, true).search(&mut a).best_move,
                AlphaBeta::with_pruning(3, false).search(&mut b).best_move
            );
            assert_eq!(a, board);
            assert_eq!(b, board);
        }
    }

    #[test]
    fn test_empty_board_has_no_candidates() {
        let mut board = Board::new(7).unwrap();
        let result = AlphaBeta::new(3).search(&mut board);
        assert_eq!(result.best_move, None);
        assert_eq!(result.nodes, 0);
    }

    #[test]
    fn test_only_frontier_cells_considered() {
        let mut board = Board::new(9).unwrap();
        board.set(Pos::new(0, 0), Marker::Player);
        let result = AlphaBeta::new(1).search(&mut board);
        let m = result.best_move.unwrap();
        assert!(m.row <= 1 && m.col <= 1);
        // Tie on a neutral position goes to the first frontier cell
        assert_eq!(m, Pos::new(0, 1));
    }
}
