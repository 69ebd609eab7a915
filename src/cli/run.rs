//! Run command implementation.

use super::output::format_text;
use super::{CliError, OutputFormat};
use knights::output::to_json_string;
use knights::{Game, read_moves_file, save_final_state};
use std::io::IsTerminal;
use std::path::Path;

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if the moves cannot be read, a move fails, or the final
/// state cannot be written.
pub(crate) fn execute(
    moves_path: &Path,
    output_path: &Path,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    let moves = read_moves_file(moves_path).map_err(|e| {
        CliError::new(format!("Failed to load {}: {e}", moves_path.display()))
    })?;

    let mut game = Game::new();
    game.process_moves(&moves)?;

    let state = game.final_state();
    save_final_state(output_path, &state).map_err(|e| {
        CliError::new(format!("Failed to save {}: {e}", output_path.display()))
    })?;

    tracing::info!(
        moves = moves.len(),
        survivors = game.live_knights().count(),
        output = %output_path.display(),
        "game finished"
    );

    if quiet {
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            print!("{}", to_json_string(&state)?);
        }
        OutputFormat::Text => {
            let colored = std::io::stdout().is_terminal();
            print!("{}", format_text(&game, moves.len(), colored));
        }
    }

    Ok(())
}
