//! Final-state JSON writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::game::FinalState;

/// Indentation used for the JSON output.
const INDENT: &[u8] = b"    ";

/// Error raised while writing the final state.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// The output could not be written.
    #[error("failed to write final state: {0}")]
    Io(#[from] io::Error),
    /// The state could not be serialized.
    #[error("failed to serialize final state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write the final state as pretty-printed JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or the underlying write fails.
pub fn write_final_state<W: Write>(writer: W, state: &FinalState) -> Result<(), OutputError> {
    let mut serializer = Serializer::with_formatter(writer, PrettyFormatter::with_indent(INDENT));
    state.serialize(&mut serializer)?;
    let mut writer = serializer.into_inner();
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Render the final state as a JSON string.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_string(state: &FinalState) -> Result<String, OutputError> {
    let mut buf = Vec::new();
    write_final_state(&mut buf, state)?;
    String::from_utf8(buf)
        .map_err(|e| OutputError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Save the final state to a JSON file, replacing any existing file.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn save_final_state(path: &Path, state: &FinalState) -> Result<(), OutputError> {
    let file = File::create(path)?;
    write_final_state(BufWriter::new(file), state)?;
    tracing::debug!(path = %path.display(), "final state written");
    Ok(())
}
