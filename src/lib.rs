//! rBankroll library root.
//! Exposes the CLI parser, the high-level run() function and the analytics modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use models::CurrencyType;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    use crate::cli::commands as c;

    match &cli.command {
        Commands::Init => c::init::handle(cli),
        Commands::Config { .. } => c::config::handle(&cli.command, cfg),
        Commands::Log { .. } => c::log::handle(&cli.command, cfg),
        Commands::Add { .. } => c::add::handle(&cli.command, cfg),
        Commands::Txn { .. } => c::txn::handle(&cli.command, cfg),
        Commands::Location { .. } => c::location::handle(&cli.command, cfg),
        Commands::Bankroll { .. } => c::bankroll::handle(&cli.command, cfg),
        Commands::Del { .. } => c::del::handle(&cli.command, cfg),
        Commands::List { .. } => c::list::handle(&cli.command, cfg),
        Commands::Stats { .. } => c::stats::handle(&cli.command, cfg),
        Commands::Report { .. } => c::report::handle(&cli.command, cfg),
        Commands::Chart { .. } => c::chart::handle(&cli.command, cfg),
        Commands::Best { .. } => c::best::handle(&cli.command, cfg),
        Commands::Staking { .. } => c::staking::handle(&cli.command, cfg),
        Commands::Export { .. } => c::export::handle(&cli.command, cfg),
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

    if let Some(dir) = &cli.data {
        cfg.data_dir = dir.clone();
    }

    if let Some(code) = &cli.currency {
        cfg.currency =
            CurrencyType::from_code(code).ok_or_else(|| AppError::InvalidCurrency(code.clone()))?;
    }

    dispatch(&cli, &cfg)
}
