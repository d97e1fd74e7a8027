//! Core types for the insight engine

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity level of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational - no action needed
    Info,
    /// Worth attention but not urgent
    Warning,
    /// Requires immediate attention
    Danger,
    /// Positive finding worth celebrating
    Success,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Danger => "danger",
            Severity::Success => "success",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Severity::Info),
            "warning" => Ok(Severity::Warning),
            "danger" => Ok(Severity::Danger),
            "success" => Ok(Severity::Success),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// A single advisory message produced by a rule.
///
/// Insights are transient: recomputed on every evaluation, never persisted
/// by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Stable key for deduplication/keying in a UI (e.g. "high-spend-Food").
    pub id: String,
    /// How urgent/important this insight is
    #[serde(rename = "type")]
    pub severity: Severity,
    /// Short title (e.g. "Budget Exceeded")
    pub title: String,
    /// One-line human-readable summary
    pub message: String,
    /// Optional recommended action
    pub recommendation: Option<String>,
}

impl Insight {
    pub fn new(
        id: impl Into<String>,
        severity: Severity,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            title: title.into(),
            message: message.into(),
            recommendation: None,
        }
    }

    pub fn with_recommendation(mut self, recommendation: impl Into<String>) -> Self {
        self.recommendation = Some(recommendation.into());
        self
    }
}

/// Aggregate spending figures surfaced alongside the insights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerStats {
    pub total_spent: f64,
    /// Summed expense amount per category. BTreeMap keeps the serialized
    /// order stable.
    pub category_totals: BTreeMap<String, f64>,
    /// Rounded `total_spent / budget * 100`.
    pub budget_usage_percent: i64,
}

/// The full advisory view: health score, ordered insights, and stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvisorReport {
    pub health_score: u8,
    pub insights: Vec<Insight>,
    pub stats: LedgerStats,
}
