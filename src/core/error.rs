//! Error types for gravity-grid.
//!
//! Every error is local and recoverable: a rejected operation leaves the
//! engine exactly as it was.

use thiserror::Error;

use super::player::Player;

/// Errors from engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("coordinate ({x}, {y}) is off the board")]
    OutOfBounds { x: usize, y: usize },

    #[error("({x}, {y}) is not a legal drop")]
    IllegalMove { x: usize, y: usize },

    #[error("game is over")]
    GameOver,

    #[error("no move to undo")]
    NothingToUndo,
}

/// Errors from encoding and decoding boards, snapshots and configuration.
#[derive(Error, Debug)]
pub enum WireError {
    #[error("expected 64 cells, got {0}")]
    CellCount(usize),

    #[error("invalid cell code {code} at request index {index}")]
    CellCode { index: usize, code: u8 },

    #[error("invalid player code {0}")]
    PlayerCode(u8),

    #[error("reply is for {got} but {expected} is to move")]
    WrongPlayer { expected: Player, got: Player },

    #[error("invalid cell code {code} in packed board at cell {index}")]
    InvalidPacked { index: usize, code: u8 },

    #[error("history entry {ply} does not match the board")]
    InconsistentHistory { ply: u32 },

    #[error("history entry {ply} is off the board")]
    HistoryOutOfBounds { ply: u32 },

    #[error("snapshot has {got} to move but its history gives {expected}")]
    WrongTurn { expected: Player, got: Player },

    #[error("invalid config: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error(transparent)]
    Engine(#[from] EngineError),
}

pub type Result<T> = std::result::Result<T, EngineError>;
