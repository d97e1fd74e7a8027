//! Ledger service
//!
//! Orchestrates the store, the auto-save policy, and the insight engine:
//! validate at the boundary, apply the policy, persist, and serve the
//! advisory view on demand. The service holds no ledger state of its own.

use chrono::Utc;
use serde::Serialize;

use crate::autosave;
use crate::error::{Error, Result};
use crate::insights::{AdvisorReport, InsightEngine};
use crate::models::{Goal, Ledger, NewGoal, NewTransaction, Transaction};
use crate::store::LedgerStore;

/// Outcome of recording a transaction.
#[derive(Debug, Clone, Serialize)]
pub struct RecordedTransaction {
    pub transaction: Transaction,
    /// Auto-save contribution credited to the savings pocket (0 when the
    /// amount was already an exact round-up multiple).
    pub auto_saved: f64,
    /// Savings pocket balance after the credit.
    pub savings_pocket: f64,
}

pub struct LedgerService {
    store: Box<dyn LedgerStore>,
    engine: InsightEngine,
}

impl LedgerService {
    pub fn new(store: Box<dyn LedgerStore>) -> Self {
        Self {
            store,
            engine: InsightEngine::new(),
        }
    }

    /// Record a new transaction: validate, assign an id, apply the
    /// auto-save policy, and persist the updated ledger.
    pub fn record(&self, new: NewTransaction) -> Result<RecordedTransaction> {
        new.validate()?;

        let mut ledger = self.store.read()?;
        let transaction = Transaction {
            id: next_id(ledger.transactions.iter().map(|t| t.id)),
            title: new.title,
            amount: new.amount,
            category: new.category,
            date: new.date,
            kind: new.kind,
        };

        let auto_saved = autosave::contribution_for(transaction.kind, transaction.amount);
        if auto_saved > 0.0 {
            ledger.savings_pocket += auto_saved;
        }
        ledger.transactions.insert(0, transaction.clone());
        self.store.write(&ledger)?;

        tracing::info!(
            id = transaction.id,
            kind = transaction.kind.as_str(),
            amount = transaction.amount,
            auto_saved,
            "transaction recorded"
        );

        Ok(RecordedTransaction {
            transaction,
            auto_saved,
            savings_pocket: ledger.savings_pocket,
        })
    }

    /// Create a savings goal.
    pub fn add_goal(&self, new: NewGoal) -> Result<Goal> {
        new.validate()?;

        let mut ledger = self.store.read()?;
        let goal = Goal {
            id: next_id(ledger.goals.iter().map(|g| g.id)),
            name: new.name,
            target: new.target,
            current: 0.0,
            color: new.color,
        };
        ledger.goals.push(goal.clone());
        self.store.write(&ledger)?;

        tracing::info!(id = goal.id, name = %goal.name, "goal created");
        Ok(goal)
    }

    /// Replace the monthly budget ceiling.
    pub fn set_budget(&self, budget: f64) -> Result<()> {
        if !budget.is_finite() || budget < 0.0 {
            return Err(Error::InvalidAmount(format!(
                "budget must be non-negative, got {}",
                budget
            )));
        }
        let mut ledger = self.store.read()?;
        ledger.budget = budget;
        self.store.write(&ledger)
    }

    /// Run the insight engine over the current ledger state.
    pub fn advise(&self) -> Result<AdvisorReport> {
        let ledger = self.store.read()?;
        Ok(self
            .engine
            .evaluate(&ledger.transactions, ledger.budget, ledger.savings_pocket))
    }

    /// The full ledger snapshot, as persisted.
    pub fn snapshot(&self) -> Result<Ledger> {
        self.store.read()
    }
}

/// Creation-time id: current millis, bumped past any existing id so two
/// records within the same millisecond still get distinct ids.
fn next_id(existing: impl Iterator<Item = i64>) -> i64 {
    let now = Utc::now().timestamp_millis();
    match existing.max() {
        Some(max) => now.max(max + 1),
        None => now,
    }
}
