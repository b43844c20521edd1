//! Game session state for the GUI

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::{AppConfig, Difficulty};
use crate::engine::{AIEngine, MoveResult};
use crate::error::{BoardError, EngineError};
use crate::rules::{find_winning_run, outcome, GameOutcome};
use crate::{Board, Marker, Pos};

/// Settings fixed for the length of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSettings {
    pub board_size: usize,
    pub difficulty: Difficulty,
    /// Overrides the difficulty's depth when set
    pub depth: Option<u32>,
    pub pruning: bool,
}

impl GameSettings {
    pub fn search_depth(&self) -> u32 {
        self.depth.unwrap_or(self.difficulty.depth())
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings::from(&AppConfig::default())
    }
}

impl From<&AppConfig> for GameSettings {
    fn from(config: &AppConfig) -> Self {
        GameSettings {
            board_size: config.game.board_size,
            difficulty: config.game.difficulty,
            depth: config.search.depth,
            pruning: config.search.pruning,
        }
    }
}

/// Reasons a human move is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,
    #[error("engine is thinking")]
    EngineThinking,
    #[error("not your turn")]
    NotYourTurn,
    #[error("{0} is off the board")]
    OutOfBounds(Pos),
    #[error("{0} is already taken")]
    Occupied(Pos),
}

/// Engine computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult, EngineError>>,
        start_time: Instant,
    },
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub settings: GameSettings,
    pub current_turn: Marker,
    pub game_over: Option<GameOutcome>,
    /// Cells of the completed line, when the game ended with a win
    pub winning_line: Option<Vec<Pos>>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Marker)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub message: Option<String>,
    engine: AIEngine,
}

impl GameState {
    /// Start a game with the human to move.
    pub fn new(settings: GameSettings) -> Result<Self, BoardError> {
        let board = Board::new(settings.board_size)?;
        let engine = AIEngine::with_config(
            settings.board_size,
            settings.search_depth(),
            settings.pruning,
        );
        info!(
            size = settings.board_size,
            depth = settings.search_depth(),
            pruning = settings.pruning,
            "new game"
        );

        Ok(Self {
            board,
            settings,
            current_turn: Marker::Player,
            game_over: None,
            winning_line: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            message: None,
            engine,
        })
    }

    /// Start over with the same settings. A search still running is abandoned.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_turn = Marker::Player;
        self.game_over = None;
        self.winning_line = None;
        self.last_move = None;
        self.move_history.clear();
        self.last_ai_result = None;
        self.ai_state = AiState::Idle;
        self.message = None;
    }

    /// Start over with new settings.
    pub fn apply_settings(&mut self, settings: GameSettings) -> Result<(), BoardError> {
        *self = Self::new(settings)?;
        Ok(())
    }

    pub fn is_human_turn(&self) -> bool {
        self.current_turn == Marker::Player
    }

    pub fn is_ai_turn(&self) -> bool {
        self.current_turn == Marker::Engine
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// React to a click on the board.
    ///
    /// After the game has ended any click starts a new one. Refused moves
    /// (occupied cell, engine's turn) are ignored.
    pub fn handle_click(&mut self, pos: Pos) {
        if self.game_over.is_some() {
            self.reset();
            return;
        }

        if let Err(err) = self.try_place_mark(pos) {
            debug!(%pos, %err, "click ignored");
        }
    }

    /// Attempt to place the human's mark at the given position
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), MoveError> {
        if self.game_over.is_some() {
            return Err(MoveError::GameOver);
        }

        if self.is_ai_thinking() {
            return Err(MoveError::EngineThinking);
        }

        if !self.is_human_turn() {
            return Err(MoveError::NotYourTurn);
        }

        if !self.board.contains(i32::from(pos.row), i32::from(pos.col)) {
            return Err(MoveError::OutOfBounds(pos));
        }

        if !self.board.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        self.execute_move(pos);
        Ok(())
    }

    /// Place the mark of the side to move, then check for the end of the game
    fn execute_move(&mut self, pos: Pos) {
        let marker = self.current_turn;

        self.board.set(pos, marker);
        self.move_history.push((pos, marker));
        self.last_move = Some(pos);
        self.message = None;

        if let Some(result) = outcome(&self.board) {
            self.winning_line = find_winning_run(&self.board).map(|run| run.cells());
            self.game_over = Some(result);
            info!(?result, moves = self.move_history.len(), "game over");
            return;
        }

        self.current_turn = marker.opponent();
    }

    /// Start the engine search on a worker thread
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }

        let mut board = self.board.clone();
        let mut engine = self.engine.clone();

        let (tx, rx) = channel();

        thread::spawn(move || {
            let result = engine.choose_move_with_stats(&mut board);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the engine's move if the search has finished
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => result,
                Err(TryRecvError::Empty) => return,
                Err(TryRecvError::Disconnected) => {
                    self.ai_state = AiState::Idle;
                    self.message = Some("Engine stopped unexpectedly".to_string());
                    return;
                }
            },
            AiState::Idle => return,
        };

        self.ai_state = AiState::Idle;

        match result {
            Ok(move_result) => {
                let pos = move_result.best_move;
                self.last_ai_result = Some(move_result);
                self.execute_move(pos);
            }
            Err(err) => {
                warn!(%err, "engine returned no move");
                self.message = Some(format!("Engine error: {err}"));
            }
        }
    }

    /// Time spent in the running search
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// One-line description of the game state
    pub fn status_text(&self) -> String {
        match self.game_over {
            Some(GameOutcome::PlayerWin) => "You win!".to_string(),
            Some(GameOutcome::EngineWin) => "Engine wins".to_string(),
            Some(GameOutcome::Draw) => "Draw".to_string(),
            None if self.is_ai_thinking() => "Engine is thinking...".to_string(),
            None if self.is_human_turn() => "Your turn (X)".to_string(),
            None => "Engine to move (O)".to_string(),
        }
    }
}
