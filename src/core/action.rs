//! Move history records.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::Player;

/// One applied move.
///
/// Used for:
/// - Undo
/// - Snapshots and replay
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who moved.
    pub player: Player,

    /// Where the piece landed.
    pub at: Coord,

    /// 1-based move number within the game.
    pub ply: u32,
}

impl MoveRecord {
    #[must_use]
    pub fn new(player: Player, at: Coord, ply: u32) -> Self {
        Self { player, at, ply }
    }
}
