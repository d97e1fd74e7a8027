//! Insight engine - runs the advisory rules over a ledger snapshot

use std::collections::BTreeMap;

use crate::models::Transaction;

use super::metrics::SpendingMetrics;
use super::score::health_score;
use super::types::{AdvisorReport, Insight, LedgerStats};
use super::{BudgetStatusRule, CategoryDominanceRule, HighSavingsRule, SpendProjectionRule};

/// A single advisory rule: a pure function from metrics to zero or more
/// insights. Rules never fail and never look at anything beyond the
/// metrics they are given.
pub trait InsightRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Evaluate the rule against the computed metrics
    fn evaluate(&self, metrics: &SpendingMetrics) -> Vec<Insight>;
}

/// The main insight engine.
///
/// Rules run in registration order and every applicable rule emits; the
/// list is never short-circuited after a match. Evaluation is pure and
/// synchronous, so identical inputs produce identical reports, insight
/// order included.
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules in their fixed priority
    /// order.
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        engine.register(Box::new(CategoryDominanceRule::new()));
        engine.register(Box::new(BudgetStatusRule::new()));
        engine.register(Box::new(SpendProjectionRule::new()));
        engine.register(Box::new(HighSavingsRule::new()));

        engine
    }

    /// Register an additional rule. It runs after the ones already
    /// registered.
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Evaluate every rule over the snapshot and assemble the advisory
    /// report.
    pub fn evaluate(
        &self,
        transactions: &[Transaction],
        budget: f64,
        savings_pocket: f64,
    ) -> AdvisorReport {
        let metrics = SpendingMetrics::compute(transactions, budget, savings_pocket);

        let mut insights = Vec::new();
        for rule in &self.rules {
            let produced = rule.evaluate(&metrics);
            tracing::debug!(rule = rule.id(), count = produced.len(), "rule evaluated");
            insights.extend(produced);
        }

        let stats = LedgerStats {
            total_spent: metrics.total_spent,
            category_totals: metrics
                .category_totals
                .iter()
                .cloned()
                .collect::<BTreeMap<String, f64>>(),
            budget_usage_percent: (metrics.budget_usage_ratio() * 100.0).round() as i64,
        };

        AdvisorReport {
            health_score: health_score(&metrics),
            insights,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ledger;

    #[test]
    fn test_rules_run_in_registration_order() {
        let ledger = Ledger::demo();
        let report = InsightEngine::new().evaluate(&ledger.transactions, ledger.budget, 25000.0);

        let ids: Vec<&str> = report.insights.iter().map(|i| i.id.as_str()).collect();
        // Dominance first, projection before the savings advice
        assert_eq!(ids, vec!["high-spend-Food", "prediction-1", "invest-advice"]);
    }

    #[test]
    fn test_stats_assembled_from_metrics() {
        let ledger = Ledger::demo();
        let report =
            InsightEngine::new().evaluate(&ledger.transactions, ledger.budget, ledger.savings_pocket);

        assert_eq!(report.stats.total_spent, 1550.0);
        assert_eq!(report.stats.budget_usage_percent, 8); // 7.75 rounds up
        assert_eq!(report.stats.category_totals["Food"], 1200.0);
        assert_eq!(report.stats.category_totals["Transport"], 350.0);
    }

    #[test]
    fn test_empty_ledger_still_produces_full_report() {
        let report = InsightEngine::new().evaluate(&[], 0.0, 0.0);
        assert_eq!(report.stats.total_spent, 0.0);
        assert!(report.stats.category_totals.is_empty());
        assert_eq!(report.stats.budget_usage_percent, 0);
        // Projection always emits; low savings costs 5 points
        assert_eq!(report.insights.len(), 1);
        assert_eq!(report.insights[0].id, "prediction-1");
        assert_eq!(report.health_score, 95);
    }
}
