use anyhow::Result;
use clap::Parser;

mod app;
mod cli;
mod config;
mod db;
mod domain;
mod format;
mod logging;
mod tui;

use crate::{app::AppContext, cli::Cli, config::Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.db.clone(), &cli.log_level)?;
    let _logger = logging::start_logging(&config.log_level, &config.log_dir);
    let app = AppContext::new(&config)?;
    cli::dispatch(&app, cli)
}
