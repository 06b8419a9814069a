//! Four-in-a-row detection.

use crate::core::{Board, Coord, Player, LINE_STEPS, WIN_LENGTH};
use crate::rules::{WinLine, WinLines};

/// Every line of `WIN_LENGTH` cells owned by `player`.
///
/// Scans each start cell (x outer, y inner) along the four `LINE_STEPS`.
/// A run longer than four is reported once per window it contains.
#[must_use]
pub fn find_lines(board: &Board, player: Player) -> WinLines {
    let mark = player.to_cell();
    let mut lines = WinLines::new();

    for start in Coord::all() {
        for step in LINE_STEPS {
            let Some(end) = start.offset(step, WIN_LENGTH - 1) else {
                continue;
            };
            let complete = (0..WIN_LENGTH)
                .filter_map(|c| start.offset(step, c))
                .all(|at| board.get(at) == mark);
            if complete {
                lines.push(WinLine::new(start, end));
            }
        }
    }

    lines
}
