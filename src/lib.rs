//! wsflow library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! attendance / stream modules behind them.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod models;
pub mod stream;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Query { .. } => cli::commands::query::handle(&cli.command, config_path),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, config_path),
        Commands::View { .. } => cli::commands::view::handle(&cli.command, config_path),
        Commands::Update { .. } => cli::commands::update::handle(&cli.command, config_path),
        Commands::Delete { .. } => cli::commands::delete::handle(&cli.command, config_path),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, config_path),
        Commands::Stream { .. } => cli::commands::stream::handle(&cli.command, config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1. parse CLI
    let cli = Cli::parse();

    // 2. logging goes to stderr; stdout belongs to the command
    logging::init(cli.verbose);

    // 3. resolve the configuration file once; commands load it as needed
    let explicit = cli.config.as_deref().map(utils::path::expand_tilde);
    let config_path = Config::resolve_path(explicit.as_deref());

    dispatch(&cli, &config_path)
}
