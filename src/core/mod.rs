//! Core engine types: geometry, players, board, history, RNG, configuration
//! and errors.
//!
//! These are the building blocks the rules and the wire format are written
//! against. None of them knows how a move is judged legal.

pub mod coord;
pub mod player;
pub mod board;
pub mod action;
pub mod config;
pub mod rng;
pub mod error;

pub use coord::{Coord, Edge, Step, BOARD_SIZE, CELL_COUNT, LINE_STEPS, WIN_LENGTH};
pub use player::{Cell, Player};
pub use board::Board;
pub use action::MoveRecord;
pub use config::EngineConfig;
pub use rng::GameRng;
pub use error::{EngineError, Result, WireError};
