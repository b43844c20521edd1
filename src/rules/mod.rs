//! Game rules for N-in-a-row
//!
//! Win detection scales with the board: three in a row below side 5, five in
//! a row from side 5 up. The three-in-a-row check is also exposed on its own
//! as a threat signal for the search.

pub mod win;

// Re-exports for convenient access
pub use win::{
    check_threat_sequence, check_winner, find_run, find_winning_run, outcome, win_length,
    GameOutcome, Run, DIRECTIONS, THREAT_LENGTH,
};
