//! JSON messages exchanged with a remote opponent.
//!
//! ```json
//! { "board": [0, 0, 2, ...], "player_to_move": 1 }
//! { "x": 3, "y": 0, "player": 1 }
//! ```
//!
//! The 64 board codes are column-major: index `x * 8 + y`.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Cell, Coord, Player, WireError, BOARD_SIZE, CELL_COUNT};
use crate::games::GravityGrid;

/// Position in the flattened wire board for `at`.
#[must_use]
pub const fn wire_index(at: Coord) -> usize {
    at.x * BOARD_SIZE + at.y
}

/// Position sent to the remote opponent after a local move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Cell codes, 0 empty, 1 ring, 2 cross.
    pub board: Vec<u8>,
    pub player_to_move: u8,
}

impl MoveRequest {
    /// Encode the current position.
    #[must_use]
    pub fn from_engine(game: &GravityGrid) -> Self {
        let mut board = vec![0u8; CELL_COUNT];
        for (at, cell) in game.board().cells() {
            board[wire_index(at)] = cell.code();
        }
        Self {
            board,
            player_to_move: game.to_move().code(),
        }
    }

    /// Encode the position only if the remote side still has a move to make.
    #[must_use]
    pub fn for_opponent(game: &GravityGrid) -> Option<Self> {
        (!game.outcome().is_terminal()).then(|| Self::from_engine(game))
    }

    /// Rebuild an engine from this request.
    pub fn decode(&self) -> Result<GravityGrid, WireError> {
        if self.board.len() != CELL_COUNT {
            return Err(WireError::CellCount(self.board.len()));
        }
        let to_move =
            Player::from_code(self.player_to_move).ok_or(WireError::PlayerCode(self.player_to_move))?;

        let mut board = Board::new();
        for at in Coord::all() {
            let index = wire_index(at);
            let code = self.board[index];
            let cell = Cell::from_code(code).ok_or(WireError::CellCode { index, code })?;
            board.set(at, cell);
        }
        Ok(GravityGrid::from_position(board, to_move))
    }

    pub fn to_json(&self) -> Result<String, WireError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, WireError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Move chosen by the remote opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReply {
    pub x: usize,
    pub y: usize,
    /// Player code the move is made for.
    pub player: u8,
}

impl MoveReply {
    #[must_use]
    pub fn new(at: Coord, player: Player) -> Self {
        Self {
            x: at.x,
            y: at.y,
            player: player.code(),
        }
    }

    pub fn to_json(&self) -> Result<String, WireError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, WireError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl GravityGrid {
    /// Apply a remote move, validated exactly like a local one.
    ///
    /// The reply must be for the side to move.
    pub fn apply_reply(&mut self, reply: &MoveReply) -> Result<(), WireError> {
        let got = Player::from_code(reply.player).ok_or(WireError::PlayerCode(reply.player))?;
        let expected = self.to_move();
        if got != expected {
            return Err(WireError::WrongPlayer { expected, got });
        }
        self.apply_move(reply.x, reply.y)?;
        Ok(())
    }
}
