//! Insight Engine - Advisory Messages and Health Score
//!
//! Turns a ledger snapshot (transactions, budget, savings pocket) into a
//! 0-100 health score and an ordered list of advisory insights. The whole
//! pipeline is pure: no I/O, no hidden state, bit-for-bit reproducible
//! output for fixed input.
//!
//! ## Built-in Rules (fixed priority order)
//!
//! - **Category Dominance** - warns when one category dominates spending
//! - **Budget Status** - danger/warning tiers against the monthly budget
//! - **Spend Projection** - always-on forecast from the average expense
//! - **High Savings** - suggests investing a large savings balance
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fintrack_core::insights::InsightEngine;
//!
//! let engine = InsightEngine::new();
//! let report = engine.evaluate(&ledger.transactions, ledger.budget, ledger.savings_pocket);
//! ```

pub mod budget_status;
pub mod category_dominance;
pub mod engine;
pub mod high_savings;
pub mod metrics;
pub mod score;
pub mod spend_projection;
pub mod types;

pub use budget_status::BudgetStatusRule;
pub use category_dominance::CategoryDominanceRule;
pub use engine::{InsightEngine, InsightRule};
pub use high_savings::HighSavingsRule;
pub use metrics::SpendingMetrics;
pub use score::health_score;
pub use spend_projection::SpendProjectionRule;
pub use types::{AdvisorReport, Insight, LedgerStats, Severity};
