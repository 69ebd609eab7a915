// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Knights: a deterministic knights-and-items board game simulator.
//!
//! Four knights start in the corners of an 8×8 board and follow a scripted
//! list of single-tile moves. Knights pick up items that boost their stats,
//! drown when they step off the board, and fight when they land on an
//! occupied tile. The run ends with a JSON snapshot of every knight and item.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   CLI (moves file → final state)    │
//! ├──────────────────┬──────────────────┤
//! │  Move source     │  State sink      │
//! │  (moves)         │  (output)        │
//! ├──────────────────┴──────────────────┤
//! │    Rule engine (game)               │
//! └─────────────────────────────────────┘
//! ```

pub mod error;
pub mod game;
pub mod moves;
pub mod output;
pub mod render;

pub use error::{GameError, GameResult};

// Re-export key game types at crate root for convenience
pub use game::{
    Coord, Direction, FinalState, Game, Item, ItemId, Knight, KnightId, KnightStatus, Move,
    MoveReport,
};
pub use moves::{MoveSourceError, parse_moves, read_moves_file};
pub use output::{OutputError, save_final_state, write_final_state};

/// Run a complete game: apply `moves` to a fresh board and project the result.
///
/// # Errors
///
/// Returns the first error raised while applying a move.
pub fn simulate(moves: &[Move]) -> GameResult<FinalState> {
    let mut game = Game::new();
    game.process_moves(moves)?;
    Ok(game.final_state())
}
