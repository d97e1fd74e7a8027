//! Health score
//!
//! A 0-100 summary of budget adherence and savings balance, recomputed
//! from scratch on every call. No history, no smoothing.

use super::metrics::SpendingMetrics;

/// Savings below this cost 5 points.
pub const LOW_SAVINGS_FLOOR: f64 = 1000.0;

/// Savings above this earn 5 points.
pub const HEALTHY_SAVINGS_CEILING: f64 = 10000.0;

/// Compute the health score for a set of metrics.
///
/// Adjustments apply in a fixed order:
/// 1. Base 100.
/// 2. Budget tier, first match only: over budget costs
///    `50 + (ratio - 1) * 100` (unbounded), above 90% costs 20, above 75%
///    costs 10.
/// 3. Savings tier, strict inequalities both sides: below
///    [`LOW_SAVINGS_FLOOR`] costs 5, above [`HEALTHY_SAVINGS_CEILING`]
///    earns 5.
/// 4. Round to nearest with ties away from zero, then clamp to `[0, 100]`.
pub fn health_score(metrics: &SpendingMetrics) -> u8 {
    let mut score = 100.0;
    let ratio = metrics.budget_usage_ratio();

    if ratio > 1.0 {
        score -= 50.0 + (ratio - 1.0) * 100.0;
    } else if ratio > 0.9 {
        score -= 20.0;
    } else if ratio > 0.75 {
        score -= 10.0;
    }

    if metrics.savings_pocket < LOW_SAVINGS_FLOOR {
        score -= 5.0;
    } else if metrics.savings_pocket > HEALTHY_SAVINGS_CEILING {
        score += 5.0;
    }

    score.round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(total_spent: f64, budget: f64, savings_pocket: f64) -> SpendingMetrics {
        SpendingMetrics {
            expense_count: if total_spent > 0.0 { 1 } else { 0 },
            total_spent,
            category_totals: vec![],
            budget,
            savings_pocket,
        }
    }

    #[test]
    fn test_perfect_score() {
        // 7.75% of budget used, savings between the thresholds
        assert_eq!(health_score(&metrics(1550.0, 20000.0, 2450.0)), 100);
    }

    #[test]
    fn test_budget_tiers_are_mutually_exclusive() {
        assert_eq!(health_score(&metrics(7600.0, 10000.0, 5000.0)), 90); // 76%
        assert_eq!(health_score(&metrics(9100.0, 10000.0, 5000.0)), 80); // 91%
        assert_eq!(health_score(&metrics(10500.0, 10000.0, 5000.0)), 45); // 105% -> -55
    }

    #[test]
    fn test_overage_penalty_grows_unbounded_and_clamps() {
        // 125% usage: 50 + 25 = 75 penalty
        assert_eq!(health_score(&metrics(25000.0, 20000.0, 5000.0)), 25);
        // 300% usage: penalty 250, clamps to zero
        assert_eq!(health_score(&metrics(60000.0, 20000.0, 5000.0)), 0);
    }

    #[test]
    fn test_savings_adjustments() {
        assert_eq!(health_score(&metrics(0.0, 20000.0, 500.0)), 95);
        assert_eq!(health_score(&metrics(0.0, 20000.0, 15000.0)), 100); // clamped
        assert_eq!(health_score(&metrics(9100.0, 10000.0, 15000.0)), 85); // bonus visible
    }

    #[test]
    fn test_savings_boundaries_are_strict() {
        // Exactly 1000 and exactly 10000 trigger neither adjustment
        assert_eq!(health_score(&metrics(0.0, 20000.0, 1000.0)), 100);
        assert_eq!(health_score(&metrics(9100.0, 10000.0, 10000.0)), 80);
    }

    #[test]
    fn test_zero_budget_with_spend_bottoms_out() {
        // Zero budget with any spend lands in the over-budget tier
        assert_eq!(health_score(&metrics(100.0, 0.0, 5000.0)), 0);
        // Zero budget, zero spend: only savings rules apply
        assert_eq!(health_score(&metrics(0.0, 0.0, 0.0)), 95);
    }

    #[test]
    fn test_score_always_in_range() {
        for spent in [0.0, 100.0, 19000.0, 21000.0, 1e6] {
            for budget in [0.0, 100.0, 20000.0] {
                for pocket in [0.0, 1000.0, 10000.0, 50000.0] {
                    let s = health_score(&metrics(spent, budget, pocket));
                    assert!(s <= 100);
                }
            }
        }
    }
}
