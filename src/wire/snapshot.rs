//! Compact binary snapshots of a whole game.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Coord, EngineConfig, MoveRecord, Player, WireError};
use crate::games::GravityGrid;

/// Everything needed to resume a game: config, packed board, side to move
/// and history. The outcome is re-derived on restore.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub config: EngineConfig,
    pub board_bits: u128,
    pub to_move: Player,
    pub history: Vec<MoveRecord>,
}

impl Snapshot {
    #[must_use]
    pub fn capture(game: &GravityGrid) -> Self {
        Self {
            config: game.config().clone(),
            board_bits: game.board().to_packed(),
            to_move: game.to_move(),
            history: game.history().iter().copied().collect(),
        }
    }

    /// Rebuild the game by replaying its history.
    ///
    /// The history's cells are lifted off the board to recover the position
    /// the game started from, then every entry is replayed through
    /// [`GravityGrid::apply_move`]. Entries must be numbered from 1, alternate
    /// players, and each be a legal drop at its turn. Pieces with no history
    /// entry belong to the starting position.
    pub fn restore(&self) -> Result<GravityGrid, WireError> {
        let mut start = Board::from_packed(self.board_bits)?;
        for record in &self.history {
            let at = Coord::checked(record.at.x, record.at.y)
                .ok_or(WireError::HistoryOutOfBounds { ply: record.ply })?;
            if start.get(at) != record.player.to_cell() {
                return Err(WireError::InconsistentHistory { ply: record.ply });
            }
            start.set(at, Cell::Empty);
        }

        let first = self.history.first().map_or(self.to_move, |record| record.player);
        let mut game = GravityGrid::from_position_with_config(self.config.clone(), start, first);
        for record in &self.history {
            if record.ply != game.ply() + 1 || record.player != game.to_move() {
                return Err(WireError::InconsistentHistory { ply: record.ply });
            }
            game
                .apply_move(record.at.x, record.at.y)
                .map_err(|_| WireError::InconsistentHistory { ply: record.ply })?;
        }

        if game.to_move() != self.to_move {
            return Err(WireError::WrongTurn {
                expected: game.to_move(),
                got: self.to_move,
            });
        }
        Ok(game)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, WireError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WireError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl GravityGrid {
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
