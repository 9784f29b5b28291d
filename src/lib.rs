//! gearminder library root.
//! Exposes the CLI parser, the high-level run() functions and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod notify;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::checker::Checker;
use crate::core::remind::SweepOutcome;
use errors::AppResult;
use notify::SmtpNotifier;
use store::CsvStore;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Open { .. } => cli::commands::open::handle(&cli.command, cfg),
        Commands::Remind { .. } => cli::commands::remind::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    logging::init("warn");

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ apply store override from the command line
    if let Some(custom) = &cli.store {
        cfg.store = custom.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}

/// Entry point used by the unattended checker binary.
///
/// Returns `Err` only when the store cannot be loaded or saved.
pub fn run_check() -> AppResult<SweepOutcome> {
    logging::init("info");

    let cfg = Config::load()?;
    let mut store = CsvStore::from_config(&cfg);
    let today = utils::date::today();

    tracing::info!(store = %store.path().display(), %today, "running reminder check");

    Checker::run(&mut store, today, || SmtpNotifier::from_config(&cfg))
}
