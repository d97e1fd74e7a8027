//! FinTrack CLI - Personal finance tracker with auto-save
//!
//! Usage:
//!   fintrack init --budget 20000      Create a ledger
//!   fintrack add "Groceries" 1200     Record an expense (auto-saves 300)
//!   fintrack insights                 Health score and advisories
//!   fintrack serve --port 3001        Start the web server

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let ledger_path = cli.ledger.unwrap_or_else(commands::default_ledger_path);

    match cli.command {
        Commands::Init { budget, demo } => commands::cmd_init(&ledger_path, budget, demo),
        Commands::Add {
            title,
            amount,
            category,
            date,
            income,
        } => commands::cmd_add(&ledger_path, title, amount, category, date, income),
        Commands::Insights => commands::cmd_insights(&ledger_path),
        Commands::Status => commands::cmd_status(&ledger_path),
        Commands::Serve { host, port } => commands::cmd_serve(&ledger_path, &host, port).await,
    }
}
