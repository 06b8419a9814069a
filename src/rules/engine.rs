//! Rules engine trait and game outcomes.
//!
//! Generic helpers (the playout harness, tests) are written against
//! `RulesEngine` rather than a concrete game.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coord, Player, Result};

/// A completed four-in-a-row, from the endpoint the scan starts at to the
/// far endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    pub start: Coord,
    pub end: Coord,
}

impl WinLine {
    #[must_use]
    pub const fn new(start: Coord, end: Coord) -> Self {
        Self { start, end }
    }
}

/// Winning lines. Inline for the common case of a handful.
pub type WinLines = SmallVec<[WinLine; 4]>;

/// Result of scanning the board for one player's lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinResult {
    pub has_won: bool,
    /// Every qualifying line, not just the first found.
    pub lines: WinLines,
}

impl WinResult {
    #[must_use]
    pub fn from_lines(lines: WinLines) -> Self {
        Self {
            has_won: !lines.is_empty(),
            lines,
        }
    }
}

/// State of a game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    /// Terminal: `player` completed at least one line.
    Won { player: Player, lines: WinLines },
    /// Terminal: the board filled with no line.
    Draw,
}

impl Outcome {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning player, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner() == Some(player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty once the game is terminal
/// - `play`: Must leave the game untouched when it returns an error
/// - `outcome`: `InProgress` until a terminal state is reached
pub trait RulesEngine {
    /// Side to move.
    fn to_move(&self) -> Player;

    /// Current outcome.
    fn outcome(&self) -> &Outcome;

    /// All legal drops for the side to move.
    fn legal_moves(&self) -> Vec<Coord>;

    /// Apply a drop for the side to move.
    fn play(&mut self, at: Coord) -> Result<()>;

    // === Convenience Methods ===

    /// Check if the game is over.
    fn is_terminal(&self) -> bool {
        self.outcome().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_outcome_is_winner() {
        let line = WinLine::new(Coord::new(0, 0), Coord::new(3, 0));
        let won = Outcome::Won {
            player: Player::Ring,
            lines: smallvec![line],
        };
        assert!(won.is_terminal());
        assert!(won.is_winner(Player::Ring));
        assert!(!won.is_winner(Player::Cross));

        assert!(Outcome::Draw.is_terminal());
        assert_eq!(Outcome::Draw.winner(), None);
        assert!(!Outcome::InProgress.is_terminal());
    }

    #[test]
    fn test_win_result_from_lines() {
        assert!(!WinResult::from_lines(WinLines::new()).has_won);

        let line = WinLine::new(Coord::new(0, 0), Coord::new(0, 3));
        let result = WinResult::from_lines(smallvec![line]);
        assert!(result.has_won);
        assert_eq!(result.lines.len(), 1);
    }
}
