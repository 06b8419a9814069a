//! Edge slides: where a piece dropped from an edge comes to rest.

use crate::core::{Board, Coord, Edge, BOARD_SIZE};

/// Resting cell of a piece entering `lane` from `edge`.
///
/// The piece stops on the first empty cell scanning inward from the edge,
/// stacking against whatever is already there. Returns `None` when the whole
/// lane is occupied or `lane` is off the board.
#[must_use]
pub fn resting_cell(board: &Board, edge: Edge, lane: usize) -> Option<Coord> {
    if lane >= BOARD_SIZE {
        return None;
    }
    let entry = edge.entry(lane);
    (0..BOARD_SIZE)
        .filter_map(|n| entry.offset(edge.inward(), n))
        .find(|&at| board.is_empty_at(at))
}

/// Is `at` the resting cell of at least one of the four slides through it?
///
/// Only the row and column containing `at` are simulated.
#[must_use]
pub fn is_reachable(board: &Board, at: Coord) -> bool {
    if !board.is_empty_at(at) {
        return false;
    }
    [
        (Edge::Left, at.y),
        (Edge::Right, at.y),
        (Edge::Top, at.x),
        (Edge::Bottom, at.x),
    ]
    .into_iter()
    .any(|(edge, lane)| resting_cell(board, edge, lane) == Some(at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Cell;

    #[test]
    fn test_slides_on_empty_board() {
        let board = Board::new();
        assert_eq!(resting_cell(&board, Edge::Left, 2), Some(Coord::new(0, 2)));
        assert_eq!(resting_cell(&board, Edge::Right, 2), Some(Coord::new(7, 2)));
        assert_eq!(resting_cell(&board, Edge::Top, 5), Some(Coord::new(5, 0)));
        assert_eq!(resting_cell(&board, Edge::Bottom, 5), Some(Coord::new(5, 7)));
    }

    #[test]
    fn test_slide_stacks_against_pieces() {
        let mut board = Board::new();
        board.set(Coord::new(0, 4), Cell::Ring);
        board.set(Coord::new(1, 4), Cell::Cross);
        assert_eq!(resting_cell(&board, Edge::Left, 4), Some(Coord::new(2, 4)));
        // The right edge of the same row is unaffected
        assert_eq!(resting_cell(&board, Edge::Right, 4), Some(Coord::new(7, 4)));
    }

    #[test]
    fn test_full_lane_has_no_resting_cell() {
        let mut board = Board::new();
        for x in 0..BOARD_SIZE {
            board.set(Coord::new(x, 6), Cell::Cross);
        }
        assert_eq!(resting_cell(&board, Edge::Left, 6), None);
        assert_eq!(resting_cell(&board, Edge::Right, 6), None);
    }

    #[test]
    fn test_off_board_lane() {
        assert_eq!(resting_cell(&Board::new(), Edge::Top, BOARD_SIZE), None);
    }

    #[test]
    fn test_reachable_from_any_edge() {
        let mut board = Board::new();
        // Column 3 filled from the top down to y = 2
        for y in 0..3 {
            board.set(Coord::new(3, y), Cell::Ring);
        }
        // (3, 3) is reached from the top even though row 3 is empty elsewhere
        assert!(is_reachable(&board, Coord::new(3, 3)));
        assert!(!is_reachable(&board, Coord::new(3, 4)));
        assert!(!is_reachable(&board, Coord::new(3, 2)));
    }
}
