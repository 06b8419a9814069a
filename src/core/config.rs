//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::error::WireError;
use super::player::Player;

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Side that moves first after construction and after every reset
    /// (default: Cross).
    pub first_player: Player,

    /// End the game as a draw once the board fills with no line
    /// (default: true). When off, a full board stays in progress with no
    /// legal moves.
    pub detect_draws: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            first_player: Player::Cross,
            detect_draws: true,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a custom first player.
    #[must_use]
    pub fn with_first_player(mut self, player: Player) -> Self {
        self.first_player = player;
        self
    }

    /// Create a new config with draw detection switched on or off.
    #[must_use]
    pub fn with_draw_detection(mut self, enabled: bool) -> Self {
        self.detect_draws = enabled;
        self
    }

    /// Load a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, WireError> {
        serde_json::from_str(json).map_err(|e| WireError::Config(e.to_string()))
    }
}
