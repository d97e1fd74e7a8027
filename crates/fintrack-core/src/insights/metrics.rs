//! Spending metrics
//!
//! One pass over the ledger snapshot produces everything the health score
//! and the advisory rules need. Metrics are plain values; computing them
//! twice from the same snapshot gives identical results.

use crate::models::{Transaction, TransactionKind};

/// Ratio used when the budget is zero but spending exists. Any spend with
/// no budget counts as deep overage; the exact value only needs to land in
/// the over-budget tier deterministically.
pub const NO_BUDGET_OVERRUN_RATIO: f64 = 2.0;

/// Aggregates computed from a ledger snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingMetrics {
    /// Number of expense transactions
    pub expense_count: usize,
    /// Sum of all expense amounts
    pub total_spent: f64,
    /// Summed expense amount per category, in first-seen order. The order
    /// is stable within a call so rule output is deterministic.
    pub category_totals: Vec<(String, f64)>,
    /// Monthly budget ceiling
    pub budget: f64,
    /// Accumulated auto-saved balance
    pub savings_pocket: f64,
}

impl SpendingMetrics {
    /// Aggregate over the whole transaction set. Income transactions are
    /// ignored; only expenses count toward spending.
    pub fn compute(transactions: &[Transaction], budget: f64, savings_pocket: f64) -> Self {
        let mut expense_count = 0;
        let mut total_spent = 0.0;
        let mut category_totals: Vec<(String, f64)> = Vec::new();

        for tx in transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
        {
            expense_count += 1;
            total_spent += tx.amount;

            match category_totals.iter_mut().find(|(c, _)| *c == tx.category) {
                Some((_, sum)) => *sum += tx.amount,
                None => category_totals.push((tx.category.clone(), tx.amount)),
            }
        }

        Self {
            expense_count,
            total_spent,
            category_totals,
            budget,
            savings_pocket,
        }
    }

    /// `total_spent / budget`, with a deterministic fallback for a zero
    /// budget: `0.0` when nothing was spent, [`NO_BUDGET_OVERRUN_RATIO`]
    /// otherwise. Never divides by zero.
    pub fn budget_usage_ratio(&self) -> f64 {
        if self.budget <= 0.0 {
            if self.total_spent <= 0.0 {
                0.0
            } else {
                NO_BUDGET_OVERRUN_RATIO
            }
        } else {
            self.total_spent / self.budget
        }
    }

    /// Average amount per expense transaction; `0` when there are none.
    pub fn average_expense(&self) -> f64 {
        if self.expense_count == 0 {
            0.0
        } else {
            self.total_spent / self.expense_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ledger;

    fn demo_metrics() -> SpendingMetrics {
        let ledger = Ledger::demo();
        SpendingMetrics::compute(&ledger.transactions, ledger.budget, ledger.savings_pocket)
    }

    #[test]
    fn test_totals_ignore_income() {
        let m = demo_metrics();
        assert_eq!(m.expense_count, 2);
        assert_eq!(m.total_spent, 1550.0);
    }

    #[test]
    fn test_category_totals_first_seen_order() {
        let m = demo_metrics();
        assert_eq!(
            m.category_totals,
            vec![("Food".to_string(), 1200.0), ("Transport".to_string(), 350.0)]
        );
    }

    #[test]
    fn test_budget_usage_ratio() {
        let m = demo_metrics();
        assert!((m.budget_usage_ratio() - 0.0775).abs() < 1e-12);
    }

    #[test]
    fn test_zero_budget_fallbacks() {
        let empty = SpendingMetrics::compute(&[], 0.0, 0.0);
        assert_eq!(empty.budget_usage_ratio(), 0.0);

        let ledger = Ledger::demo();
        let m = SpendingMetrics::compute(&ledger.transactions, 0.0, 0.0);
        assert_eq!(m.budget_usage_ratio(), NO_BUDGET_OVERRUN_RATIO);
    }

    #[test]
    fn test_average_expense_zero_when_empty() {
        let m = SpendingMetrics::compute(&[], 20000.0, 0.0);
        assert_eq!(m.average_expense(), 0.0);
        assert_eq!(demo_metrics().average_expense(), 775.0);
    }
}
