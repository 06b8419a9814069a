//! Board geometry: coordinates, line directions, and drop edges.
//!
//! The grid is 8×8 with the origin at the top-left. `x` grows to the right,
//! `y` grows downward.

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_SIZE: usize = 8;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Number of consecutive pieces that win the game.
pub const WIN_LENGTH: usize = 4;

/// A cell position on the board.
///
/// Always in bounds when built through [`Coord::checked`] or [`Coord::all`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    /// Create a coordinate without a bounds check.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Create a coordinate, returning `None` when it falls off the board.
    #[must_use]
    pub fn checked(x: usize, y: usize) -> Option<Self> {
        (x < BOARD_SIZE && y < BOARD_SIZE).then_some(Self { x, y })
    }

    /// Is this coordinate on the board?
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    /// Flat index into a row-major cell array (`x + y * 8`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.x + self.y * BOARD_SIZE
    }

    /// Inverse of [`Coord::index`].
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            x: index % BOARD_SIZE,
            y: index / BOARD_SIZE,
        }
    }

    /// Move `n` steps along `step`, or `None` if that leaves the board.
    #[must_use]
    pub fn offset(self, step: Step, n: usize) -> Option<Self> {
        let n = n as isize;
        let x = self.x as isize + step.dx * n;
        let y = self.y as isize + step.dy * n;
        if x < 0 || y < 0 {
            return None;
        }
        Self::checked(x as usize, y as usize)
    }

    /// Every coordinate on the board, `x` outer and `y` inner.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|x| (0..BOARD_SIZE).map(move |y| Coord { x, y }))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A unit step on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    pub dx: isize,
    pub dy: isize,
}

impl Step {
    #[must_use]
    pub const fn new(dx: isize, dy: isize) -> Self {
        Self { dx, dy }
    }
}

/// The four directions scanned for lines: vertical, main diagonal,
/// horizontal, anti-diagonal.
///
/// The four opposite directions are omitted, so each line is found from
/// exactly one endpoint.
pub const LINE_STEPS: [Step; 4] = [
    Step::new(0, 1),
    Step::new(1, 1),
    Step::new(1, 0),
    Step::new(-1, 1),
];

/// A board edge pieces can be dropped from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    /// Enters row `lane` at `x = 0`, slides toward `+x`.
    Left,
    /// Enters row `lane` at `x = 7`, slides toward `-x`.
    Right,
    /// Enters column `lane` at `y = 0`, slides toward `+y`.
    Top,
    /// Enters column `lane` at `y = 7`, slides toward `-y`.
    Bottom,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// The cell a piece enters on for the given row (Left/Right) or column
    /// (Top/Bottom).
    #[must_use]
    pub const fn entry(self, lane: usize) -> Coord {
        let last = BOARD_SIZE - 1;
        match self {
            Edge::Left => Coord::new(0, lane),
            Edge::Right => Coord::new(last, lane),
            Edge::Top => Coord::new(lane, 0),
            Edge::Bottom => Coord::new(lane, last),
        }
    }

    /// Direction of travel away from this edge.
    #[must_use]
    pub const fn inward(self) -> Step {
        match self {
            Edge::Left => Step::new(1, 0),
            Edge::Right => Step::new(-1, 0),
            Edge::Top => Step::new(0, 1),
            Edge::Bottom => Step::new(0, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_bounds() {
        assert_eq!(Coord::checked(0, 0), Some(Coord::new(0, 0)));
        assert_eq!(Coord::checked(7, 7), Some(Coord::new(7, 7)));
        assert_eq!(Coord::checked(8, 0), None);
        assert_eq!(Coord::checked(0, 8), None);
    }

    #[test]
    fn test_index_roundtrip() {
        for coord in Coord::all() {
            assert_eq!(Coord::from_index(coord.index()), coord);
        }
        assert_eq!(Coord::new(3, 2).index(), 19);
    }

    #[test]
    fn test_all_order() {
        let all: Vec<_> = Coord::all().collect();
        assert_eq!(all.len(), CELL_COUNT);
        assert_eq!(all[0], Coord::new(0, 0));
        assert_eq!(all[1], Coord::new(0, 1));
        assert_eq!(all[8], Coord::new(1, 0));
    }

    #[test]
    fn test_offset_leaves_board() {
        let corner = Coord::new(0, 0);
        assert_eq!(corner.offset(Step::new(-1, 1), 1), None);
        assert_eq!(corner.offset(Step::new(1, 1), 3), Some(Coord::new(3, 3)));
        assert_eq!(Coord::new(5, 0).offset(Step::new(1, 0), 3), None);
    }

    #[test]
    fn test_edge_entries() {
        assert_eq!(Edge::Left.entry(3), Coord::new(0, 3));
        assert_eq!(Edge::Right.entry(3), Coord::new(7, 3));
        assert_eq!(Edge::Top.entry(3), Coord::new(3, 0));
        assert_eq!(Edge::Bottom.entry(3), Coord::new(3, 7));
    }
}
