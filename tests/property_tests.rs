//! Property tests over random move sequences.

use proptest::prelude::*;

use gravity_grid::sim::random_playout;
use gravity_grid::{
    Cell, Coord, EngineError, GameRng, GravityGrid, MoveRequest, Outcome, Player, RulesEngine,
    BOARD_SIZE,
};

/// Play `choices` as indices into the legal move list, stopping at a
/// terminal state.
fn play_choices(choices: &[usize]) -> GravityGrid {
    let mut game = GravityGrid::new();
    for &choice in choices {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let at = moves[choice % moves.len()];
        game.apply_move(at.x, at.y).unwrap();
    }
    game
}

proptest! {
    /// Occupied cells are never legal, and `legal_moves` lists exactly the
    /// cells the predicate accepts while the game runs.
    #[test]
    fn legality_is_consistent(choices in prop::collection::vec(any::<usize>(), 0..64)) {
        let game = play_choices(&choices);
        let listed = game.legal_moves();

        for at in Coord::all() {
            let legal = game.is_legal_move(at.x, at.y);
            if !game.board().is_empty_at(at) {
                prop_assert!(!legal);
            }
            if !game.outcome().is_terminal() {
                prop_assert_eq!(listed.contains(&at), legal);
            }
        }
    }

    /// Every successful move flips the turn and fills exactly one cell.
    #[test]
    fn moves_alternate_and_fill_one_cell(choices in prop::collection::vec(any::<usize>(), 1..64)) {
        let mut game = GravityGrid::new();
        for &choice in &choices {
            let moves = game.legal_moves();
            if moves.is_empty() {
                break;
            }
            let at = moves[choice % moves.len()];
            let mover = game.to_move();
            let empties = game.board().count(Cell::Empty);

            game.apply_move(at.x, at.y).unwrap();

            prop_assert_eq!(game.to_move(), mover.other());
            prop_assert_eq!(game.board().count(Cell::Empty), empties - 1);
            prop_assert_eq!(game.board().get(at), mover.to_cell());
        }
    }

    /// Rejected moves never change the game.
    #[test]
    fn rejected_moves_are_noops(
        choices in prop::collection::vec(any::<usize>(), 0..40),
        x in 0..BOARD_SIZE + 2,
        y in 0..BOARD_SIZE + 2,
    ) {
        let mut game = play_choices(&choices);
        let before = game.clone();

        match game.apply_move(x, y) {
            Ok(()) => prop_assert!(before.is_legal_move(x, y)),
            Err(EngineError::OutOfBounds { .. }) => {
                prop_assert!(x >= BOARD_SIZE || y >= BOARD_SIZE);
                prop_assert_eq!(&game, &before);
            }
            Err(EngineError::GameOver) => {
                prop_assert!(before.outcome().is_terminal());
                prop_assert_eq!(&game, &before);
            }
            Err(_) => {
                prop_assert!(!before.is_legal_move(x, y));
                prop_assert_eq!(&game, &before);
            }
        }
    }

    /// A won game names a player whose lines the scan also reports.
    #[test]
    fn outcome_matches_scan(choices in prop::collection::vec(any::<usize>(), 0..64)) {
        let game = play_choices(&choices);
        match game.outcome() {
            Outcome::Won { player, lines } => {
                let result = game.check_winner(*player);
                prop_assert!(result.has_won);
                prop_assert_eq!(&result.lines, lines);
                // The winner moved last
                prop_assert_eq!(game.last_move().map(|m| m.player), Some(*player));
            }
            Outcome::Draw => {
                prop_assert!(game.board().is_full());
                prop_assert!(!game.check_winner(Player::Ring).has_won);
                prop_assert!(!game.check_winner(Player::Cross).has_won);
            }
            Outcome::InProgress => {
                prop_assert!(!game.check_winner(Player::Ring).has_won);
                prop_assert!(!game.check_winner(Player::Cross).has_won);
            }
        }
    }

    /// Undoing every move returns to the starting position.
    #[test]
    fn undo_all_restores_start(choices in prop::collection::vec(any::<usize>(), 0..64)) {
        let mut game = play_choices(&choices);
        while game.undo().is_ok() {}
        prop_assert_eq!(game, GravityGrid::new());
    }

    /// Decoding a wire request reproduces the position.
    #[test]
    fn wire_request_reproduces_position(choices in prop::collection::vec(any::<usize>(), 0..64)) {
        let game = play_choices(&choices);
        let decoded = MoveRequest::from_engine(&game).decode().unwrap();

        prop_assert_eq!(decoded.board(), game.board());
        prop_assert_eq!(decoded.to_move(), game.to_move());
        prop_assert_eq!(decoded.outcome(), game.outcome());
    }

    /// Random playouts always end within 64 moves.
    #[test]
    fn playouts_terminate(seed in any::<u64>()) {
        let mut game = GravityGrid::new();
        let report = random_playout(&mut game, &mut GameRng::new(seed), 0).unwrap();
        prop_assert!(report.outcome.is_terminal());
        prop_assert!(report.plies as usize <= BOARD_SIZE * BOARD_SIZE);
        prop_assert!(game.is_terminal());
    }
}
