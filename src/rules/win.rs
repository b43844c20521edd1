//! Run detection and terminal-state checks
//!
//! A run is `length` consecutive identical marks along one axis, centered on
//! the cell being tested. Cells are scanned row-major and, for each occupied
//! cell, the axes are tried in [`DIRECTIONS`] order; the first hit wins. Both
//! orders are part of the observable behavior: callers that stop at "first
//! found" must see the same run every time.
//!
//! Off-board offsets read as `Empty`, so a run never wraps or hangs over an
//! edge.

use crate::board::{Board, Marker, Pos};

/// Axis vectors in detection order
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal down-right
    (1, -1), // Diagonal down-left
];

/// Length of the line that signals an emerging threat, on every board size
pub const THREAT_LENGTH: usize = 3;

/// Winning line length: five on boards of side 5 or more, three below that
#[inline]
pub fn win_length(size: usize) -> usize {
    if size >= 5 {
        5
    } else {
        3
    }
}

/// A detected line of identical marks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub marker: Marker,
    /// Cell the run was found from
    pub center: Pos,
    /// One of [`DIRECTIONS`]
    pub direction: (i32, i32),
    pub length: usize,
}

impl Run {
    /// Covered positions, from the negative end of the axis to the positive end
    pub fn cells(&self) -> Vec<Pos> {
        let (dr, dc) = self.direction;
        run_offsets(self.length)
            .map(|k| {
                let row = i32::from(self.center.row) + dr * k;
                let col = i32::from(self.center.col) + dc * k;
                Pos::new(row as u8, col as u8)
            })
            .collect()
    }
}

/// Final result of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    PlayerWin,
    EngineWin,
    Draw,
}

/// Offsets along an axis covered by a run of `length` around its center.
/// Odd lengths are symmetric (-1..=1 for three, -2..=2 for five).
#[inline]
fn run_offsets(length: usize) -> std::ops::Range<i32> {
    let back = (length as i32 - 1) / 2;
    -back..(length as i32 - back)
}

/// Test whether `length` cells around `pos` along `(dr, dc)` all hold `marker`
#[inline]
fn is_run_at(board: &Board, pos: Pos, marker: Marker, (dr, dc): (i32, i32), length: usize) -> bool {
    let (row, col) = (i32::from(pos.row), i32::from(pos.col));
    run_offsets(length).all(|k| board.get_or_empty(row + dr * k, col + dc * k) == marker)
}

/// Find the first run of `length` in scan order
pub fn find_run(board: &Board, length: usize) -> Option<Run> {
    for pos in board.positions() {
        let marker = board.get(pos);
        if marker == Marker::Empty {
            continue;
        }

        for &direction in &DIRECTIONS {
            if is_run_at(board, pos, marker, direction, length) {
                return Some(Run {
                    marker,
                    center: pos,
                    direction,
                    length,
                });
            }
        }
    }
    None
}

/// Winning run for this board size, if any
#[inline]
pub fn find_winning_run(board: &Board) -> Option<Run> {
    find_run(board, win_length(board.size()))
}

/// Check for a winner
///
/// Returns the marker of the first winning run found, `None` otherwise.
#[inline]
pub fn check_winner(board: &Board) -> Option<Marker> {
    find_winning_run(board).map(|run| run.marker)
}

/// Check for a three-in-a-row regardless of board size.
///
/// On boards where five are needed to win this flags a line two moves short
/// of a win, which the pruned search uses to bias towards attacking or
/// blocking.
#[inline]
pub fn check_threat_sequence(board: &Board) -> Option<Marker> {
    find_run(board, THREAT_LENGTH).map(|run| run.marker)
}

/// Decide whether the game has ended. A completed line takes precedence over
/// a full board.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    match check_winner(board) {
        Some(Marker::Player) => Some(GameOutcome::PlayerWin),
        Some(Marker::Engine) => Some(GameOutcome::EngineWin),
        _ if board.is_full() => Some(GameOutcome::Draw),
        _ => None,
    }
}
