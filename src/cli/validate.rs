//! Move file validation command implementation.

use super::CliError;
use super::output::moves_per_knight;
use knights::{MoveSourceError, parse_moves};
use std::fs;
use std::path::Path;

/// Execute the validate command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains an invalid move.
pub(crate) fn execute(path: &Path) -> Result<(), CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::new(format!("Failed to read {}: {e}", path.display())))?;

    println!("Validating: {}", path.display());
    println!();

    let framed = text.lines().any(|line| line.contains("GAME-START"))
        && text.lines().any(|line| line.contains("GAME-END"));
    println!(
        "  - GAME-START / GAME-END framing: {}",
        if framed { "present" } else { "absent" }
    );

    let moves = match parse_moves(&text) {
        Ok(moves) => {
            print_check("Move tokens", true);
            moves
        }
        Err(e) => {
            print_check("Move tokens", false);
            return Err(match e {
                MoveSourceError::Parse { .. } => CliError::new(format!("Invalid move file: {e}")),
                MoveSourceError::Io(_) => e.into(),
            });
        }
    };

    println!();
    println!("Summary:");
    println!("  Total moves:  {}", moves.len());
    for (id, count) in moves_per_knight(&moves) {
        println!("  {:<12}  {count}", format!("{} ({id}):", id.color()));
    }

    println!();
    println!("Validation successful!");

    Ok(())
}

fn print_check(name: &str, ok: bool) {
    let status = if ok { "OK" } else { "FAILED" };
    let symbol = if ok { "✓" } else { "✗" };
    println!("  {symbol} {name}: {status}");
}
