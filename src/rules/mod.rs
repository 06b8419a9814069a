//! Rules engine trait and outcome types.
//!
//! Games implement `RulesEngine` to define:
//! - Legal moves for the side to move
//! - How a move changes the game
//! - Win and draw conditions

pub mod engine;

pub use engine::{Outcome, RulesEngine, WinLine, WinLines, WinResult};
