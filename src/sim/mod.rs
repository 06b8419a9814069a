//! Random playouts.
//!
//! Plays uniformly random legal moves for both sides. Used to exercise the
//! rules over many positions in tests and benchmarks; it does no evaluation.

use serde::{Deserialize, Serialize};

use crate::core::{GameRng, Result};
use crate::rules::{Outcome, RulesEngine};

/// Summary of one playout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayoutReport {
    /// Moves applied during this playout.
    pub plies: u32,
    /// Outcome when the playout stopped.
    pub outcome: Outcome,
}

/// Play random moves until the game ends, no move is legal, or `max_plies`
/// moves have been made (0 = unlimited).
pub fn random_playout<E: RulesEngine>(
    engine: &mut E,
    rng: &mut GameRng,
    max_plies: u32,
) -> Result<PlayoutReport> {
    let mut plies = 0;

    loop {
        if engine.is_terminal() || (max_plies > 0 && plies >= max_plies) {
            break;
        }

        let moves = engine.legal_moves();
        let Some(&at) = rng.choose(&moves) else {
            break;
        };
        engine.play(at)?;
        plies += 1;
    }

    Ok(PlayoutReport {
        plies,
        outcome: engine.outcome().clone(),
    })
}
