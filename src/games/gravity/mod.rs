//! Gravity grid: four-edge drop game on an 8×8 board.
//!
//! - Two players, Ring and Cross; Cross moves first by default
//! - A piece enters from the left, right, top or bottom edge and slides
//!   inward until it stops on the first empty cell of its row or column
//! - Any cell some slide rests on is a legal drop
//! - Four in a row (vertical, horizontal or diagonal) wins
//! - A full board with no line is a draw

mod game;
pub mod lines;
pub mod slide;

pub use game::GravityGrid;
