//! Property-based tests for game mechanics.
//!
//! These tests drive the engine with random move lists and check the
//! board-wide rules after every step.
//! Run with: cargo test --release prop_game

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use proptest::prelude::*;

use knights::game::{KnightStatus, Step, check_invariants};
use knights::{Direction, Game, KnightId, Move, simulate};

fn arb_move() -> impl Strategy<Value = Move> {
    (0..KnightId::ALL.len(), 0..Direction::ALL.len())
        .prop_map(|(k, d)| Move::new(KnightId::ALL[k], Direction::ALL[d]))
}

fn arb_moves(max: usize) -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(arb_move(), 0..max)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    /// Board-wide rules hold after every single move.
    #[test]
    fn prop_invariants_hold_after_each_move(moves in arb_moves(120)) {
        let mut game = Game::new();
        for mv in &moves {
            game.move_knight(mv.knight, mv.direction).unwrap();
            let violations = check_invariants(&game);
            prop_assert!(violations.is_empty(), "after {mv}: {violations:?}");
        }
    }

    /// The same move list always produces the same final state.
    #[test]
    fn prop_simulation_is_deterministic(moves in arb_moves(120)) {
        prop_assert_eq!(simulate(&moves).unwrap(), simulate(&moves).unwrap());
    }

    /// A dead or drowned knight never changes again.
    #[test]
    fn prop_terminal_knights_are_frozen(moves in arb_moves(120)) {
        let mut game = Game::new();
        for mv in &moves {
            let before = game.knights.clone();
            game.move_knight(mv.knight, mv.direction).unwrap();
            for (old, new) in before.iter().zip(&game.knights) {
                if !old.is_live() {
                    prop_assert_eq!(old, new);
                }
            }
        }
    }

    /// Moving a non-live knight is a no-op for the whole board.
    #[test]
    fn prop_moving_terminal_knight_is_noop(moves in arb_moves(80), extra in arb_move()) {
        let mut game = Game::new();
        game.process_moves(&moves).unwrap();
        let Some(terminal) = game.knights.iter().find(|k| !k.is_live()).map(|k| k.id) else {
            return Ok(());
        };

        let before = game.clone();
        let report = game.move_knight(terminal, extra.direction).unwrap();
        prop_assert_eq!(report.step, Step::Ignored);
        prop_assert_eq!(before, game);
    }

    /// A loose item only ever changes position while it is carried.
    #[test]
    fn prop_loose_items_stay_put(moves in arb_moves(120)) {
        let mut game = Game::new();
        for mv in &moves {
            let before = game.items.clone();
            game.move_knight(mv.knight, mv.direction).unwrap();
            for (old, new) in before.iter().zip(&game.items) {
                if !old.equipped {
                    prop_assert_eq!(old.position, new.position);
                }
            }
        }
    }

    /// Every fight is started by the mover, and a mover that loses
    /// starts no further fights.
    #[test]
    fn prop_fights_stop_when_mover_loses(moves in arb_moves(160)) {
        let mut game = Game::new();
        for mv in &moves {
            let report = game.move_knight(mv.knight, mv.direction).unwrap();
            let mut mover_alive = true;
            for outcome in &report.fights {
                prop_assert!(mover_alive, "mover fought after losing: {report:?}");
                prop_assert_eq!(outcome.attacker, report.knight);
                prop_assert_ne!(outcome.winner, outcome.loser);
                mover_alive = outcome.attacker_won();
            }
            if !report.fights.is_empty() {
                prop_assert_eq!(game.knight(report.knight).unwrap().is_live(), mover_alive);
            }
        }
    }

    /// Drowned knights are exactly the ones with no position.
    #[test]
    fn prop_drowned_iff_off_board(moves in arb_moves(120)) {
        let state = simulate(&moves).unwrap();
        for id in KnightId::ALL {
            let knight = state.knight(id).unwrap();
            prop_assert_eq!(
                knight.status == KnightStatus::Drowned,
                knight.position.is_none()
            );
        }
    }
}
