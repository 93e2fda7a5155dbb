use std::path::PathBuf;

use crate::game::Piece;

/// Errors raised when a move cannot be applied to a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is not an open end of its row")]
    NotOpenEnd { row: usize, col: usize },

    #[error("game is already over")]
    GameOver,
}

/// Errors raised when an agent is asked for a move it cannot give.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal moves: the board is full")]
    EmptyMoveSet,

    #[error("search depth must be at least 1")]
    ZeroDepth,

    #[error("position is already won by {0}")]
    AlreadyWon(Piece),
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

    #[error(
        "invalid board dimensions {rows}x{cols}: both must be >= 1 and the board at most {} cells",
        crate::game::MAX_CELLS
    )]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Errors that can occur while loading or replaying a move history.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("failed to read move history {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse move history: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("move history has invalid dimensions: {0}")]
    Dimensions(#[source] ConfigError),

    #[error("move {index} was played by {found}, expected {expected}")]
    WrongTurn {
        index: usize,
        expected: Piece,
        found: Piece,
    },

    #[error("move {index} is illegal: {source}")]
    IllegalMove {
        index: usize,
        #[source]
        source: MoveError,
    },
}
