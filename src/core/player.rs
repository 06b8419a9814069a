//! Player identity and cell contents.
//!
//! ## Player
//!
//! Exactly two sides: `Ring` (player A) and `Cross` (player B).
//!
//! ## Cell
//!
//! A grid position is either empty or holds one player's mark. The numeric
//! codes (0 empty, 1 ring, 2 cross) exist only for the wire and packed-board
//! encodings; game logic always matches on the enums.

use serde::{Deserialize, Serialize};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player A.
    Ring,
    /// Player B. Moves first by default.
    Cross,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::Ring, Player::Cross];

    /// The opposing side.
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::Ring => Player::Cross,
            Player::Cross => Player::Ring,
        }
    }

    /// The mark this player leaves on the board.
    #[must_use]
    pub const fn to_cell(self) -> Cell {
        match self {
            Player::Ring => Cell::Ring,
            Player::Cross => Cell::Cross,
        }
    }

    /// Wire code: 1 for ring, 2 for cross.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Player::Ring => 1,
            Player::Cross => 2,
        }
    }

    /// Parse a wire code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Player> {
        match code {
            1 => Some(Player::Ring),
            2 => Some(Player::Cross),
            _ => None,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Player::Ring => "Ring",
            Player::Cross => "Cross",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Contents of a single grid position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Ring,
    Cross,
}

impl Cell {
    /// The player whose mark occupies this cell, if any.
    #[must_use]
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Ring => Some(Player::Ring),
            Cell::Cross => Some(Player::Cross),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Wire code: 0 empty, 1 ring, 2 cross.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Ring => 1,
            Cell::Cross => 2,
        }
    }

    /// Parse a wire code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Cell> {
        match code {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Ring),
            2 => Some(Cell::Cross),
            _ => None,
        }
    }

    /// Single-character glyph used by the text rendering.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Ring => 'O',
            Cell::Cross => 'X',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.to_cell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Ring.other(), Player::Cross);
        assert_eq!(Player::Cross.other(), Player::Ring);
    }

    #[test]
    fn test_player_codes() {
        for player in Player::BOTH {
            assert_eq!(Player::from_code(player.code()), Some(player));
            assert_eq!(player.to_cell().owner(), Some(player));
        }
        assert_eq!(Player::from_code(0), None);
        assert_eq!(Player::from_code(3), None);
    }

    #[test]
    fn test_cell_codes() {
        assert_eq!(Cell::from_code(0), Some(Cell::Empty));
        assert_eq!(Cell::from_code(1), Some(Cell::Ring));
        assert_eq!(Cell::from_code(2), Some(Cell::Cross));
        assert_eq!(Cell::from_code(3), None);
        assert_eq!(Cell::Empty.owner(), None);
    }

    #[test]
    fn test_player_display() {
        assert_eq!(format!("{}", Player::Ring), "Ring");
        assert_eq!(Player::Cross.to_string(), "Cross");
    }
}
