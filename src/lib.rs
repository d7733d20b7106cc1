//! workbalance library root.
//! Exposes the CLI parser, the high-level run() function, and the pipeline
//! modules (source -> schema -> sessions -> target -> series -> window -> chart).

pub mod chart;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod source;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Chart { .. } => cli::commands::chart::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config (and locale profile) once; --config overrides the path.
    let cfg = Config::load(cli.config.as_deref())?;

    dispatch(&cli, &cfg)
}
