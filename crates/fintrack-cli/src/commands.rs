//! Command implementations

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};

use fintrack_core::currency::format_pkr;
use fintrack_core::{
    JsonFileStore, Ledger, LedgerService, LedgerStore, NewTransaction, TransactionKind,
};

/// Default ledger location: `<data dir>/fintrack/ledger.json`
/// (e.g. ~/.local/share/fintrack/ledger.json on Linux).
pub fn default_ledger_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("fintrack")
        .join("ledger.json")
}

fn open_service(path: &Path) -> LedgerService {
    tracing::debug!("Opening ledger at {}", path.display());
    LedgerService::new(Box::new(JsonFileStore::new(path)))
}

pub fn cmd_init(path: &Path, budget: f64, demo: bool) -> Result<()> {
    let store = JsonFileStore::new(path);
    if store.exists() {
        bail!("ledger already exists at {}", path.display());
    }

    let mut ledger = if demo { Ledger::demo() } else { Ledger::default() };
    if budget > 0.0 {
        ledger.budget = budget;
    }
    store.write(&ledger)?;

    println!("Created ledger at {}", path.display());
    if ledger.budget > 0.0 {
        println!("Monthly budget: {}", format_pkr(ledger.budget));
    }
    Ok(())
}

pub fn cmd_add(
    path: &Path,
    title: String,
    amount: f64,
    category: String,
    date: Option<NaiveDate>,
    income: bool,
) -> Result<()> {
    let svc = open_service(path);
    let kind = if income {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    };
    let date = date.unwrap_or_else(|| Local::now().date_naive());

    let recorded = svc.record(NewTransaction {
        title,
        amount,
        category,
        date,
        kind,
    })?;

    println!(
        "Recorded {} {} ({})",
        recorded.transaction.kind,
        recorded.transaction.title,
        format_pkr(recorded.transaction.amount)
    );
    if recorded.auto_saved > 0.0 {
        println!(
            "Auto-saved {} -> savings pocket now {}",
            format_pkr(recorded.auto_saved),
            format_pkr(recorded.savings_pocket)
        );
    }
    Ok(())
}

pub fn cmd_insights(path: &Path) -> Result<()> {
    let svc = open_service(path);
    let report = svc.advise()?;

    println!("Health score: {}/100", report.health_score);
    println!(
        "Total spent: {} ({}% of budget)",
        format_pkr(report.stats.total_spent),
        report.stats.budget_usage_percent
    );

    for insight in &report.insights {
        println!();
        println!("[{}] {}", insight.severity, insight.title);
        println!("  {}", insight.message);
        if let Some(rec) = &insight.recommendation {
            println!("  > {}", rec);
        }
    }
    Ok(())
}

pub fn cmd_status(path: &Path) -> Result<()> {
    let svc = open_service(path);
    let ledger = svc.snapshot()?;

    println!("Ledger: {}", path.display());
    println!("Transactions: {}", ledger.transactions.len());
    println!("Budget: {}", format_pkr(ledger.budget));
    println!("Savings pocket: {}", format_pkr(ledger.savings_pocket));
    for goal in &ledger.goals {
        println!(
            "Goal: {} ({} of {})",
            goal.name,
            format_pkr(goal.current),
            format_pkr(goal.target)
        );
    }
    Ok(())
}

pub async fn cmd_serve(path: &Path, host: &str, port: u16) -> Result<()> {
    tracing::info!("Serving ledger at {}", path.display());
    let store = JsonFileStore::new(path);
    fintrack_server::serve(
        Box::new(store),
        host,
        port,
        fintrack_server::ServerConfig::default(),
    )
    .await
}
