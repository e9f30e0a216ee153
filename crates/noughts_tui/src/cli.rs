//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use noughts_core::{Position, PositionError};
use std::path::PathBuf;

/// noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (default: ./noughts.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the log file used by the interactive UI
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Feed clicks through the game and print the result
    Replay {
        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,

        /// Cells to click, in order: an index 0-8 or a label such as "center"
        #[arg(required = true, value_parser = parse_click)]
        clicks: Vec<usize>,
    },
}

/// Parses a click target.
///
/// Any number is accepted as-is so that off-grid indices reach the game and
/// get ignored there; words must name a cell.
pub fn parse_click(s: &str) -> Result<usize, PositionError> {
    match s.trim().parse::<usize>() {
        Ok(index) => Ok(index),
        Err(_) => Position::parse(s).map(Position::to_index),
    }
}
