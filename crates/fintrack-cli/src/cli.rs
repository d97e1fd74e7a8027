//! CLI argument definitions

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "fintrack",
    about = "Personal finance tracker with auto-save and advisory insights",
    version
)]
pub struct Cli {
    /// Path to the ledger file (defaults to the platform data directory)
    #[arg(long, global = true)]
    pub ledger: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new ledger file
    Init {
        /// Monthly budget ceiling
        #[arg(long, default_value_t = 0.0)]
        budget: f64,
        /// Seed the ledger with demo data
        #[arg(long)]
        demo: bool,
    },
    /// Record a transaction
    Add {
        /// Short description
        title: String,
        /// Amount in rupees (positive)
        amount: f64,
        /// Category label
        #[arg(short, long, default_value = "General")]
        category: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,
        /// Record as income instead of expense
        #[arg(long)]
        income: bool,
    },
    /// Show the health score and advisory insights
    Insights,
    /// Show ledger totals
    Status,
    /// Start the web server
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port to listen on
        #[arg(short, long, default_value_t = 3001)]
        port: u16,
    },
}
