//! Rule engine for the knights board game.
//!
//! Implements the game rules:
//! - 8×8 board with four knights starting in the corners
//! - Items that replace a knight's base stats when picked up
//! - Drowning when a knight steps off the board
//! - Combat when a moving knight lands on an occupied tile

mod board;
mod combat;
mod invariants;
mod item;
mod knight;
mod snapshot;
mod state;

pub use board::{BOARD_SIZE, Coord, Direction};
pub use combat::{FightOutcome, SURPRISE_BONUS, attack_score, defense_score, fight};
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use item::{Item, ItemId, ItemSpec};
pub use knight::{BASE_STAT, Knight, KnightId, KnightStatus, Step};
pub use snapshot::{EntityState, FinalState, ItemState, KnightState};
pub use state::{Game, Move, MoveReport};
