//! N-in-a-row engine for the tic-tac-toe family of games
//!
//! A square board of side 1 to 19 where the human plays `X` and the engine
//! plays `O`:
//! - Three in a row wins on boards up to 4x4
//! - Five in a row wins from 5x5 up
//! - Small boards are searched exhaustively, larger boards with a
//!   depth-bounded alpha-beta search over cells next to existing marks
//!
//! # Architecture
//!
//! - [`board`]: Board storage, adjacency queries and scoped trial moves
//! - [`rules`]: Run detection, winner and threat checks
//! - [`search`]: Search strategies (exhaustive minimax, alpha-beta)
//! - [`engine`]: Engine entry point picking the strategy by board size
//! - [`config`]: TOML application configuration
//! - [`ui`]: egui game window
//!
//! # Quick Start
//!
//! ```
//! use tictactoe::{AIEngine, Board, Marker, Pos};
//!
//! let mut board = Board::new(3).unwrap();
//! let mut engine = AIEngine::new(3, 5);
//!
//! // Human opens in the center
//! board.set(Pos::new(1, 1), Marker::Player);
//!
//! // Engine replies
//! let pos = engine.choose_move(&mut board).unwrap();
//! board.set(pos, Marker::Engine);
//! println!("{board}");
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Marker, Pos, MAX_BOARD_SIZE};
pub use config::{AppConfig, Difficulty};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{BoardError, ConfigError, EngineError};
pub use rules::GameOutcome;
