//! FinTrack Core Library
//!
//! Shared functionality for the FinTrack personal finance tool:
//! - Domain models and the ledger snapshot
//! - Auto-save policy (expense round-up and income skim)
//! - Insight engine: spending metrics, health score, advisory rules
//! - Currency formatting for advisory text
//! - Ledger store abstraction (JSON file or in-memory)
//! - Ledger service tying store, policy, and engine together

pub mod autosave;
pub mod currency;
pub mod error;
pub mod insights;
pub mod ledger;
pub mod models;
pub mod store;

pub use error::{Error, Result};
pub use insights::{
    AdvisorReport, Insight, InsightEngine, InsightRule, LedgerStats, Severity, SpendingMetrics,
};
pub use ledger::{LedgerService, RecordedTransaction};
pub use models::{Goal, Ledger, NewGoal, NewTransaction, Transaction, TransactionKind};
pub use store::{JsonFileStore, LedgerStore, MemoryStore};
