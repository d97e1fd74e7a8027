//! Budget status rule
//!
//! One insight at most: `danger` once the budget is blown, otherwise a
//! `warning` when usage passes [`BUDGET_WARNING_RATIO`]. The two tiers are
//! mutually exclusive.

use crate::currency::format_pkr;

use super::engine::InsightRule;
use super::metrics::SpendingMetrics;
use super::types::{Insight, Severity};

/// Usage above this share of the budget triggers the warning tier.
pub const BUDGET_WARNING_RATIO: f64 = 0.85;

pub struct BudgetStatusRule;

impl BudgetStatusRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BudgetStatusRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for BudgetStatusRule {
    fn id(&self) -> &'static str {
        "budget-status"
    }

    fn evaluate(&self, metrics: &SpendingMetrics) -> Vec<Insight> {
        let ratio = metrics.budget_usage_ratio();

        if ratio > 1.0 {
            let overage = metrics.total_spent - metrics.budget;
            vec![Insight::new(
                "budget-critical",
                Severity::Danger,
                "Budget Exceeded",
                format!(
                    "You have exceeded your monthly budget by {}.",
                    format_pkr(overage)
                ),
            )
            .with_recommendation("Stop all non-essential spending immediately.")]
        } else if ratio > BUDGET_WARNING_RATIO {
            let percent = (ratio * 100.0).round() as i64;
            vec![Insight::new(
                "budget-warning",
                Severity::Warning,
                "Approaching Budget Limit",
                format!("You have used {}% of your budget.", percent),
            )
            .with_recommendation("Review your remaining planned expenses.")]
        } else {
            vec![]
        }
    }
}
