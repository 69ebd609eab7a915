//! Knights CLI - Command-line interface for running knights games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Knights - A deterministic knights-and-items board game simulator
#[derive(Parser, Debug)]
#[command(name = "knights")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply a move file and write the final state
    Run {
        /// Move file, one `<knight>:<direction>` token per line
        #[arg(short, long, default_value = "moves.txt")]
        moves: PathBuf,

        /// Where to write the final-state JSON
        #[arg(short, long, default_value = "final_state.json")]
        output: PathBuf,

        /// Output format: json or text
        #[arg(short, long, default_value = "json")]
        format: cli::OutputFormat,

        /// Suppress output on stdout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Check a move file without playing it
    Validate {
        /// Move file to validate
        #[arg(required = true)]
        moves: PathBuf,
    },
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default level.
fn init_logging(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Run {
            moves,
            output,
            format,
            quiet,
        } => {
            init_logging(if quiet { "warn" } else { "info" });
            cli::run::execute(&moves, &output, format, quiet)
        }

        Commands::Validate { moves } => {
            init_logging("warn");
            cli::validate::execute(&moves)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
