//! CLI command implementations for Knights.

pub(crate) mod run;
pub(crate) mod validate;

mod output;

use clap::ValueEnum;

/// Output format for the `run` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    /// The final-state JSON, as written to the output file.
    Json,
    /// ASCII board and per-entity summary.
    Text,
}

/// CLI error type.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub(crate) struct CliError {
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<knights::GameError> for CliError {
    fn from(e: knights::GameError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<knights::MoveSourceError> for CliError {
    fn from(e: knights::MoveSourceError) -> Self {
        Self::new(e.to_string())
    }
}

impl From<knights::OutputError> for CliError {
    fn from(e: knights::OutputError) -> Self {
        Self::new(e.to_string())
    }
}
