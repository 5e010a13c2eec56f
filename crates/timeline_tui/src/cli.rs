//! Command-line interface for timeline_tui.

use crate::replay::ScriptIntent;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic-tac-toe with a navigable, branchable move history
#[derive(Parser, Debug)]
#[command(name = "timeline_tui")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Apply a script of intents and print the resulting view
    Replay {
        /// Intents: `m<cell>` plays cell 1-9, `j<step>` jumps, `s` toggles sort
        #[arg(value_name = "INTENT")]
        intents: Vec<ScriptIntent>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Board, status and move list as plain text
    Text,
    /// The view as JSON
    Json,
}
