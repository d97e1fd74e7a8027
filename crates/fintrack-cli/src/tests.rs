//! CLI tests

use chrono::NaiveDate;
use tempfile::TempDir;

use crate::cli::Cli;
use crate::commands;

#[test]
fn test_cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn test_default_ledger_path_shape() {
    let path = commands::default_ledger_path();
    assert!(path.ends_with("fintrack/ledger.json"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.json");

    commands::cmd_init(&path, 20000.0, false).unwrap();
    assert!(path.exists());

    // Second init must not clobber the existing ledger
    assert!(commands::cmd_init(&path, 0.0, false).is_err());
}

#[test]
fn test_init_demo_then_add_and_insights() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.json");

    commands::cmd_init(&path, 0.0, true).unwrap();
    commands::cmd_add(
        &path,
        "Coffee".to_string(),
        350.0,
        "Food".to_string(),
        NaiveDate::from_ymd_opt(2024, 5, 10),
        false,
    )
    .unwrap();

    // Demo pocket 2,450 plus the 150 round-up
    let svc = fintrack_core::LedgerService::new(Box::new(fintrack_core::JsonFileStore::new(&path)));
    let ledger = svc.snapshot().unwrap();
    assert_eq!(ledger.savings_pocket, 2600.0);
    assert_eq!(ledger.transactions.len(), 4);

    commands::cmd_insights(&path).unwrap();
    commands::cmd_status(&path).unwrap();
}

#[test]
fn test_add_rejects_negative_amount() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.json");
    commands::cmd_init(&path, 0.0, false).unwrap();

    let result = commands::cmd_add(
        &path,
        "Broken".to_string(),
        -1.0,
        "Food".to_string(),
        None,
        false,
    );
    assert!(result.is_err());
}
