//! racetable library root.
//! Renders race result tables (elapsed times, derived columns) and overlays
//! pending change requests on the rendered cells. Exposes the CLI parser and
//! the high-level run() function used by the binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

pub use crate::core::{apply_changes, elapsed_millis, format_elapsed, render};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, cfg_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, cfg_path),
        Commands::Render { .. } => cli::commands::render::handle(&cli.command, cfg),
        Commands::Elapsed { .. } => cli::commands::elapsed::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    utils::logger::init_logger(cli.verbose);

    let cfg_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);

    // `init` must work even when the existing file is broken
    let cfg = match cli.command {
        Commands::Init { .. } => Config::default(),
        _ => Config::load(Some(&cfg_path))?,
    };

    dispatch(&cli, &cfg, &cfg_path)
}
