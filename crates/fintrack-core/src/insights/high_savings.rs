//! High savings balance rule
//!
//! A `success` insight once the savings pocket grows past
//! [`HIGH_SAVINGS_THRESHOLD`], nudging the user toward a longer-term
//! instrument.

use crate::currency::format_pkr;

use super::engine::InsightRule;
use super::metrics::SpendingMetrics;
use super::types::{Insight, Severity};

/// Savings above this earn the investment suggestion.
pub const HIGH_SAVINGS_THRESHOLD: f64 = 20000.0;

pub struct HighSavingsRule;

impl HighSavingsRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighSavingsRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for HighSavingsRule {
    fn id(&self) -> &'static str {
        "high-savings"
    }

    fn evaluate(&self, metrics: &SpendingMetrics) -> Vec<Insight> {
        if metrics.savings_pocket <= HIGH_SAVINGS_THRESHOLD {
            return vec![];
        }

        vec![Insight::new(
            "invest-advice",
            Severity::Success,
            "High Savings Balance",
            format!(
                "You have a healthy savings balance of {}.",
                format_pkr(metrics.savings_pocket)
            ),
        )
        .with_recommendation("Consider investing 50% of this into a mutual fund or fixed deposit.")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(savings_pocket: f64) -> SpendingMetrics {
        SpendingMetrics {
            expense_count: 0,
            total_spent: 0.0,
            category_totals: vec![],
            budget: 20000.0,
            savings_pocket,
        }
    }

    #[test]
    fn test_high_balance_emits_success() {
        let insights = HighSavingsRule::new().evaluate(&metrics(25000.0));
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].id, "invest-advice");
        assert_eq!(insights[0].severity, Severity::Success);
        assert_eq!(
            insights[0].message,
            "You have a healthy savings balance of Rs 25,000."
        );
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(HighSavingsRule::new().evaluate(&metrics(20000.0)).is_empty());
        assert!(HighSavingsRule::new().evaluate(&metrics(2450.0)).is_empty());
    }
}
