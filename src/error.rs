//! Error types for the rule engine.

use crate::game::KnightId;

/// Fatal conditions raised while turning input into moves or applying them.
///
/// Every variant aborts the run. Nothing in the engine retries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// A direction outside `N`, `S`, `E`, `W`.
    #[error("invalid direction: {0:?} (expected one of N, S, E, W)")]
    InvalidDirection(String),
    /// A knight identifier outside `R`, `B`, `G`, `Y`.
    #[error("invalid knight: {0:?} (expected one of R, B, G, Y)")]
    InvalidKnight(String),
    /// A move token without the `<knight>:<direction>` shape.
    #[error("invalid move: {0:?} (expected <knight>:<direction>)")]
    InvalidMove(String),
    /// The knight is not on the roster of this game.
    #[error("knight {0} is not on the board")]
    KnightNotFound(KnightId),
}

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;
