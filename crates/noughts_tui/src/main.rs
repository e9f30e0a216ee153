//! noughts - two-player tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use noughts_tui::cli::{Cli, Command};
use noughts_tui::{Config, logging, replay, tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(path) = cli.log_file {
        let log = config.log().clone().with_file(path);
        config = config.with_log(log);
    }

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            logging::init_file_logging(config.log())?;
            info!(log_file = %config.log().file().display(), "Logging to file");
            tui::run(&config)
        }
        Command::Replay { json, clicks } => {
            logging::init_stderr_logging(config.log());
            info!(clicks = clicks.len(), json, "Replaying clicks");
            replay::run(&clicks, json, &mut std::io::stdout().lock())
        }
    }
}
