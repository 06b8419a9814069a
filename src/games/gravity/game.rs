//! The gravity-grid board engine.

use im::Vector;
use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::lines::find_lines;
use super::slide::{is_reachable, resting_cell};
use crate::core::{
    Board, Cell, Coord, Edge, EngineConfig, EngineError, MoveRecord, Player, Result, BOARD_SIZE,
};
use crate::rules::{Outcome, RulesEngine, WinResult};

/// A single game: board, side to move, cached outcome and move history.
///
/// Each instance is independent. Callers own it and serialize access; the
/// engine does no locking of its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GravityGrid {
    config: EngineConfig,
    board: Board,
    to_move: Player,
    outcome: Outcome,
    /// Persistent vector so clones for playouts stay cheap.
    history: Vector<MoveRecord>,
}

impl Default for GravityGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl GravityGrid {
    /// Start a game with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Start a game with a custom configuration.
    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            to_move: config.first_player,
            config,
            board: Board::new(),
            outcome: Outcome::InProgress,
            history: Vector::new(),
        }
    }

    /// Resume from an externally supplied position.
    ///
    /// The outcome is derived from the board right away, so a position that
    /// already contains a line is terminal. History starts empty.
    #[must_use]
    pub fn from_position(board: Board, to_move: Player) -> Self {
        Self::from_position_with_config(EngineConfig::default(), board, to_move)
    }

    /// Same as [`GravityGrid::from_position`] with a custom configuration.
    #[must_use]
    pub fn from_position_with_config(config: EngineConfig, board: Board, to_move: Player) -> Self {
        let mut game = Self {
            config,
            board,
            to_move,
            outcome: Outcome::InProgress,
            history: Vector::new(),
        };
        game.outcome = game.derive_outcome(to_move.other());
        game
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current board snapshot.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move. Frozen once the game is terminal.
    #[must_use]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[must_use]
    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    /// Moves applied since the game started or was last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Number of moves applied.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.history.len() as u32
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.back()
    }

    // === Legality ===

    /// Resting cell of a single slide from `edge` along row or column `lane`.
    #[must_use]
    pub fn slide(&self, edge: Edge, lane: usize) -> Option<Coord> {
        resting_cell(&self.board, edge, lane)
    }

    /// Can a piece be dropped at `(x, y)`?
    ///
    /// True iff the cell is empty and is where at least one of the four
    /// slides through it (left and right along row `y`, top and bottom along
    /// column `x`) comes to rest. Off-board coordinates are never legal.
    #[must_use]
    pub fn is_legal_move(&self, x: usize, y: usize) -> bool {
        Coord::checked(x, y).is_some_and(|at| is_reachable(&self.board, at))
    }

    /// Every legal drop, sorted by `(x, y)`. Empty once the game is over.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Coord> {
        if self.outcome.is_terminal() {
            return Vec::new();
        }

        let mut seen = FxHashSet::default();
        for edge in Edge::ALL {
            for lane in 0..BOARD_SIZE {
                if let Some(at) = self.slide(edge, lane) {
                    seen.insert(at);
                }
            }
        }

        let mut moves: Vec<_> = seen.into_iter().collect();
        moves.sort_unstable();
        moves
    }

    // === Mutation ===

    /// Drop a piece for the side to move at `(x, y)`.
    ///
    /// On success the cell takes the mover's mark, the turn passes to the
    /// other player, and the outcome is re-evaluated. On error nothing
    /// changes.
    pub fn apply_move(&mut self, x: usize, y: usize) -> Result<()> {
        let Some(at) = Coord::checked(x, y) else {
            debug!(x, y, "move rejected: off the board");
            return Err(EngineError::OutOfBounds { x, y });
        };
        if self.outcome.is_terminal() {
            debug!(x, y, "move rejected: game over");
            return Err(EngineError::GameOver);
        }
        if !is_reachable(&self.board, at) {
            debug!(x, y, "move rejected: not a legal drop");
            return Err(EngineError::IllegalMove { x, y });
        }

        let mover = self.to_move;
        self.board.set(at, mover.to_cell());
        let ply = self.ply() + 1;
        self.history.push_back(MoveRecord::new(mover, at, ply));
        self.to_move = mover.other();
        self.outcome = self.derive_outcome(mover);

        debug!(x, y, player = %mover, ply, "move applied");
        match &self.outcome {
            Outcome::Won { player, lines } => {
                info!(winner = %player, lines = lines.len(), ply, "game won");
            }
            Outcome::Draw => info!(ply, "game drawn"),
            Outcome::InProgress => {}
        }
        Ok(())
    }

    /// Does `player` have at least one four-in-a-row? Reports every line.
    #[must_use]
    pub fn check_winner(&self, player: Player) -> WinResult {
        WinResult::from_lines(find_lines(&self.board, player))
    }

    /// Clear the board and start over with the configured first player.
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = self.config.first_player;
        self.outcome = Outcome::InProgress;
        self.history.clear();
        debug!(first = %self.to_move, "game reset");
    }

    /// Take back the last applied move.
    ///
    /// The cell is emptied, its player is to move again, and the outcome is
    /// re-derived. Allowed from a terminal state.
    pub fn undo(&mut self) -> Result<MoveRecord> {
        let record = self.history.pop_back().ok_or(EngineError::NothingToUndo)?;
        self.board.set(record.at, Cell::Empty);
        self.to_move = record.player;
        self.outcome = self.derive_outcome(record.player.other());
        debug!(x = record.at.x, y = record.at.y, player = %record.player, "move undone");
        Ok(record)
    }

    /// Outcome of the current board, checking `mover` before the opponent.
    fn derive_outcome(&self, mover: Player) -> Outcome {
        for player in [mover, mover.other()] {
            let lines = find_lines(&self.board, player);
            if !lines.is_empty() {
                return Outcome::Won { player, lines };
            }
        }
        if self.config.detect_draws && self.board.is_full() {
            return Outcome::Draw;
        }
        Outcome::InProgress
    }
}

impl RulesEngine for GravityGrid {
    fn to_move(&self) -> Player {
        self.to_move
    }

    fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    fn legal_moves(&self) -> Vec<Coord> {
        GravityGrid::legal_moves(self)
    }

    fn play(&mut self, at: Coord) -> Result<()> {
        self.apply_move(at.x, at.y)
    }
}

impl std::fmt::Display for GravityGrid {
    /// Board with legal drops marked `+`, followed by a status line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..BOARD_SIZE {
            let row: String = (0..BOARD_SIZE)
                .map(|x| {
                    let at = Coord::new(x, y);
                    let cell = self.board.get(at);
                    if !self.outcome.is_terminal() && is_reachable(&self.board, at) {
                        '+'
                    } else {
                        cell.glyph()
                    }
                })
                .collect();
            writeln!(f, "{row}")?;
        }
        match &self.outcome {
            Outcome::InProgress => write!(f, "{} to move", self.to_move),
            Outcome::Won { player, .. } => write!(f, "{player} won"),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}
