use std::path::PathBuf;

/// Errors raised by board queries and placement.
///
/// `InvalidColumn` is a bad argument from the caller. The placement variants
/// are contract violations: the board is left untouched when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {0} is out of range (expected 0..=6)")]
    InvalidColumn(usize),

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("cell ({row}, {col}) is out of range")]
    OutOfRange { row: usize, col: usize },

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) has an empty cell below it")]
    Unsupported { row: usize, col: usize },
}

/// Errors raised when asking the AI for a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    #[error("no valid moves: the board is full")]
    NoValidMoves,
}

/// Errors raised by the game session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("the game is already over")]
    GameOver,

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Errors that can occur when exporting a finished game.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write game record to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
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
