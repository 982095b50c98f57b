//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;

/// Connect Four on the console: enter a column number to drop a disc, 0 to quit.
#[derive(Parser, Debug)]
#[command(name = "connect_four")]
#[command(about = "Two-player Connect Four over a line-oriented text protocol", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML file with `rows` and `columns`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Number of rows (overrides the config file)
    #[arg(short, long)]
    pub rows: Option<usize>,

    /// Number of columns (overrides the config file)
    #[arg(short, long)]
    pub columns: Option<usize>,
}
