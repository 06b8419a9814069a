//! # gravity-grid
//!
//! Rules engine for a two-player drop game on an 8×8 board where pieces
//! enter from any of the four edges and slide inward until blocked.
//!
//! ## Design Principles
//!
//! 1. **Owned state**: every game is a `GravityGrid` value. No globals, so
//!    any number of games can run side by side.
//!
//! 2. **Apply or no-op**: a rejected move returns an error and leaves the
//!    game untouched.
//!
//! 3. **I/O at the edge**: rendering, input and transport belong to the
//!    caller. The crate only offers the encodings they need.
//!
//! ## Modules
//!
//! - `core`: Coordinates, players, board, history, RNG, configuration, errors
//! - `rules`: `RulesEngine` trait and outcome types
//! - `games`: The gravity-grid engine
//! - `wire`: JSON messages for a remote opponent, binary snapshots
//! - `sim`: Random playouts
//!
//! ```
//! use gravity_grid::{GravityGrid, Player};
//!
//! let mut game = GravityGrid::new();
//! assert_eq!(game.to_move(), Player::Cross);
//! assert!(game.is_legal_move(0, 0));
//! assert!(!game.is_legal_move(3, 3));
//!
//! game.apply_move(0, 0).unwrap();
//! assert_eq!(game.to_move(), Player::Ring);
//! assert!(game.apply_move(0, 0).is_err());
//! ```

pub mod core;
pub mod rules;
pub mod games;
pub mod wire;
pub mod sim;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord, Edge, EngineConfig, EngineError, GameRng, MoveRecord, Player, WireError,
    BOARD_SIZE, WIN_LENGTH,
};

pub use crate::rules::{Outcome, RulesEngine, WinLine, WinLines, WinResult};

pub use crate::games::GravityGrid;

pub use crate::wire::{MoveReply, MoveRequest, Snapshot};

pub use crate::sim::{random_playout, PlayoutReport};
