//! Spend projection rule
//!
//! Always emits a single `info` insight projecting spend over the next
//! few purchases from the average expense amount. With no expenses the
//! projection is all zeros rather than absent.

use crate::currency::format_pkr;

use super::engine::InsightRule;
use super::metrics::SpendingMetrics;
use super::types::{Insight, Severity};

/// Number of future purchases the projection covers.
pub const PROJECTION_WINDOW: f64 = 5.0;

/// Recommended ceiling for future transactions, as a share of the average.
pub const RECOMMENDED_AVERAGE_SHARE: f64 = 0.8;

pub struct SpendProjectionRule;

impl SpendProjectionRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SpendProjectionRule {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightRule for SpendProjectionRule {
    fn id(&self) -> &'static str {
        "spend-projection"
    }

    fn evaluate(&self, metrics: &SpendingMetrics) -> Vec<Insight> {
        let average = metrics.average_expense();

        vec![Insight::new(
            "prediction-1",
            Severity::Info,
            "Spending Projection",
            format!(
                "Based on your average spending of {} per transaction, you might spend another {} in the next few purchases.",
                format_pkr(average),
                format_pkr(average * PROJECTION_WINDOW)
            ),
        )
        .with_recommendation(format!(
            "Keep transactions below {} to save money.",
            format_pkr(average * RECOMMENDED_AVERAGE_SHARE)
        ))]
    }
}
