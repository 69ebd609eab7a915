//! Output formatting utilities for CLI.

use knights::render::render_ascii;
use knights::{Game, KnightId, Move};

/// Format a finished game as human-readable text.
pub(super) fn format_text(game: &Game, moves_applied: usize, colored: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!("Game Result ({moves_applied} moves)\n"));
    let survivors: Vec<_> = game.live_knights().map(|k| k.id.color()).collect();
    if survivors.is_empty() {
        output.push_str("  Survivors: none\n\n");
    } else {
        output.push_str(&format!("  Survivors: {}\n\n", survivors.join(", ")));
    }

    output.push_str(&render_ascii(game, colored));
    output
}

/// Number of moves scripted for each knight, in roster order.
pub(super) fn moves_per_knight(moves: &[Move]) -> [(KnightId, usize); 4] {
    KnightId::ALL.map(|id| (id, moves.iter().filter(|m| m.knight == id).count()))
}
