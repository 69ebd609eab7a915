//! Move list parsing.
//!
//! A move file holds one `<knight>:<direction>` token per line, optionally
//! framed by `GAME-START` / `GAME-END` markers:
//!
//! ```text
//! GAME-START
//! R:S
//! B:E
//! GAME-END
//! ```
//!
//! Blank lines and any line containing `GAME` are skipped. The first
//! malformed line aborts parsing.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::GameError;
use crate::game::Move;

/// Marker that frames a move list.
const FRAME_MARKER: &str = "GAME";

/// Error raised while reading a move list.
#[derive(Debug, thiserror::Error)]
pub enum MoveSourceError {
    /// The move file could not be read.
    #[error("failed to read moves: {0}")]
    Io(#[from] io::Error),
    /// A line is not a valid move.
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        source: GameError,
    },
}

/// Parse a move list from text.
///
/// # Errors
///
/// Returns [`MoveSourceError::Parse`] for the first line that is not a valid
/// move token.
pub fn parse_moves(text: &str) -> Result<Vec<Move>, MoveSourceError> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.contains(FRAME_MARKER))
        .map(|(line, token)| {
            token
                .parse()
                .map_err(|source| MoveSourceError::Parse { line, source })
        })
        .collect()
}

/// Read and parse a move file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains an invalid move.
pub fn read_moves_file(path: &Path) -> Result<Vec<Move>, MoveSourceError> {
    let text = fs::read_to_string(path)?;
    let moves = parse_moves(&text)?;
    tracing::debug!(path = %path.display(), count = moves.len(), "moves loaded");
    Ok(moves)
}
