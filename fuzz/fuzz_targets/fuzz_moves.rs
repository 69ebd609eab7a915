#![no_main]

//! Move sequence fuzzer.
//!
//! Plays arbitrary move lists and checks the board rules after every step.
//! Also feeds the raw bytes to the move parser, which must reject or accept
//! without panicking.

use arbitrary::Arbitrary;
use knights::game::check_invariants;
use knights::{Direction, Game, KnightId, Move, parse_moves};
use libfuzzer_sys::fuzz_target;

/// A fuzzer-generated move.
#[derive(Arbitrary, Debug, Clone, Copy)]
struct FuzzMove {
    knight: u8,
    direction: u8,
}

impl FuzzMove {
    fn to_move(self) -> Move {
        Move::new(
            KnightId::ALL[usize::from(self.knight) % KnightId::ALL.len()],
            Direction::ALL[usize::from(self.direction) % Direction::ALL.len()],
        )
    }
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    moves: Vec<FuzzMove>,
    text: String,
}

fuzz_target!(|input: FuzzInput| {
    let _ = parse_moves(&input.text);

    let mut game = Game::new();
    for fuzz_move in input.moves.iter().take(1_000) {
        let mv = fuzz_move.to_move();
        let report = game
            .move_knight(mv.knight, mv.direction)
            .expect("every roster knight is on the board");

        let violations = check_invariants(&game);
        assert!(violations.is_empty(), "after {mv} ({report:?}): {violations:?}");
    }

    let json = knights::output::to_json_string(&game.final_state())
        .expect("final state always serializes");
    assert!(json.starts_with('{'));
});
