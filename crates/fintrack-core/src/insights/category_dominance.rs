//! Category dominance rule
//!
//! Flags every category that eats more than [`DOMINANCE_SHARE`] of total
//! spending. Categories are checked in first-seen order, so a snapshot
//! can produce several warnings in a stable order.

use crate::currency::format_pkr;

use super::engine::InsightRule;
use super::metrics::SpendingMetrics;
use super::types::{Insight, Severity};

/// A category above this share of total spend gets a warning.
pub const DOMINANCE_SHARE: f64 = 0.30;

/// Share of total spend recommended as next month's cap for the category.
/// Note this is a quarter of *total* spend, not of the category's own
/// total. Callers display the text verbatim, so the formula stays as is.
pub const RECOMMENDED_CAP_SHARE: f64 = 0.25;

pub struct CategoryDominanceRule;

impl CategoryDominanceRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CategoryDominanceRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for CategoryDominanceRule {
    fn id(&self) -> &'static str {
        "category-dominance"
    }

    fn evaluate(&self, metrics: &SpendingMetrics) -> Vec<Insight> {
        if metrics.total_spent <= 0.0 {
            return vec![];
        }

        let mut insights = Vec::new();
        for (category, amount) in &metrics.category_totals {
            let share = amount / metrics.total_spent;
            if share <= DOMINANCE_SHARE {
                continue;
            }

            let percentage = (share * 100.0).round() as i64;
            let cap = metrics.total_spent * RECOMMENDED_CAP_SHARE;

            insights.push(
                Insight::new(
                    format!("high-spend-{}", category),
                    Severity::Warning,
                    format!("Spending Alert: {}", category),
                    format!(
                        "You've spent {} on {}. This is {}% of your total expenses.",
                        format_pkr(*amount),
                        category,
                        percentage
                    ),
                )
                .with_recommendation(format!(
                    "Try to cap {} spending to {} next month.",
                    category,
                    format_pkr(cap)
                )),
            );
        }
        insights
    }
}
