use std::path::PathBuf;

/// Errors that can occur when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board size {size} out of range (expected 1..={max})")]
    InvalidSize { size: usize, max: usize },
}

/// Errors returned by the engine when asked for a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("no empty cell left to play")]
    NoMoveAvailable,

    #[error("engine configured for a {expected}x{expected} board, got {actual}x{actual}")]
    BoardSizeMismatch { expected: usize, actual: usize },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
