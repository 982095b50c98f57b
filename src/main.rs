//! Connect Four console binary.
//!
//! Reads moves from stdin and writes the game to stdout. Logs go to stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use connect_four_console::{ConsoleController, ConsoleView, ControllerError, GameConfig};
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    run(config)
}

/// Resolves board dimensions: defaults, then the config file, then flags.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let base = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    Ok(base.with_overrides(cli.rows, cli.columns))
}

/// Plays one console session on stdin/stdout.
#[instrument]
fn run(config: GameConfig) -> Result<()> {
    let mut board = config.build_board()?;
    info!(rows = board.rows(), columns = board.columns(), "Board ready");

    let stdin = io::stdin();
    let mut controller = ConsoleController::new(stdin.lock(), ConsoleView::new(io::stdout()));

    match controller.play_game(Some(&mut board)) {
        Ok(outcome) => {
            info!(?outcome, "Goodbye");
            Ok(())
        }
        Err(ControllerError::InputClosed) => {
            info!("Input closed, exiting");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
