//! Terminal front-end for the tic-tac-toe timeline.
//!
//! `play` opens the interactive board; `replay` applies a script of
//! intents and prints the resulting view.

#![warn(missing_docs)]

mod cli;
mod config;
mod replay;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::AppConfig;
use timeline_tictactoe::HistoryOrder;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let config = AppConfig::load(config.as_deref()).context("Failed to load config")?;

            // Log to a file so output does not fight the terminal UI.
            let log_file = std::fs::File::create(config.log_file()).with_context(|| {
                format!("Failed to create log file {}", config.log_file().display())
            })?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
                )
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false)
                .try_init();

            info!(?config, "Starting interactive session");
            tui::run(&config)
        }
        Command::Replay { intents, format } => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
                )
                .with_writer(std::io::stderr)
                .init();

            let output = replay::run(&intents, HistoryOrder::default(), format)?;
            println!("{output}");
            Ok(())
        }
    }
}
