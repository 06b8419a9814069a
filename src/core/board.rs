//! The 8×8 grid of cells.
//!
//! `Board` is a plain value: it can be built and edited freely, but a game in
//! progress owns its board privately and only exposes it by shared reference.
//!
//! ## Packed form
//!
//! A board packs into a `u128` with two bits per cell, the cell at `(x, y)`
//! occupying bits `2 * (x + 8y)` and up. Codes are 0 empty, 1 ring, 2 cross.

use serde::{Deserialize, Serialize};

use super::coord::{Coord, BOARD_SIZE, CELL_COUNT};
use super::error::WireError;
use super::player::Cell;

/// Fixed-size 8×8 matrix of cells, stored row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    #[serde(with = "cells_serde")]
    cells: [Cell; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Get the cell at `at`.
    #[inline]
    #[must_use]
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.index()]
    }

    /// Overwrite the cell at `at`.
    #[inline]
    pub fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.index()] = cell;
    }

    #[inline]
    #[must_use]
    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.get(at).is_empty()
    }

    /// Clear every cell.
    pub fn clear(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Number of cells holding `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Iterate over `(coord, cell)` pairs, `x` outer and `y` inner.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().map(move |at| (at, self.get(at)))
    }

    /// Pack into two bits per cell.
    #[must_use]
    pub fn to_packed(&self) -> u128 {
        self.cells
            .iter()
            .enumerate()
            .fold(0u128, |acc, (i, cell)| acc | (u128::from(cell.code()) << (2 * i)))
    }

    /// Unpack a board produced by [`Board::to_packed`].
    pub fn from_packed(bits: u128) -> Result<Self, WireError> {
        let mut board = Self::new();
        for i in 0..CELL_COUNT {
            let code = ((bits >> (2 * i)) & 0b11) as u8;
            board.cells[i] = Cell::from_code(code).ok_or(WireError::InvalidPacked {
                index: i,
                code,
            })?;
        }
        Ok(board)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..BOARD_SIZE {
            let row: String = (0..BOARD_SIZE)
                .map(|x| self.get(Coord::new(x, y)).glyph())
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

// serde only derives arrays up to 32 elements.
mod cells_serde {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{Cell, CELL_COUNT};

    pub fn serialize<S: Serializer>(cells: &[Cell; CELL_COUNT], s: S) -> Result<S::Ok, S::Error> {
        cells.as_slice().serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[Cell; CELL_COUNT], D::Error> {
        let cells = Vec::<Cell>::deserialize(d)?;
        let len = cells.len();
        cells
            .try_into()
            .map_err(|_| D::Error::invalid_length(len, &"64 cells"))
    }
}
