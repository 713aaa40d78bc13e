//! convtrack library root.
//! Exposes the CLI parser, the high-level run() function, and the calculation
//! and storage modules behind it.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Entry => cli::commands::entry::handle(cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // test mode never reads the user's config file
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(file) = &cli.file {
        cfg.sheet_file = file.clone();
    }
    if cli.no_open {
        cfg.open_after_save = false;
    }

    logging::init(&cfg.log_level);

    dispatch(&cli, &cfg)
}
