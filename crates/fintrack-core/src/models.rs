//! Domain models for FinTrack

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Direction of a transaction. The amount itself is always positive;
/// direction is carried solely by the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::str::FromStr for TransactionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(Error::InvalidTransactionType(s.to_string())),
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A recorded transaction. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub title: String,
    /// Always positive; see [`TransactionKind`] for direction.
    pub amount: f64,
    /// Free-form category label (e.g. "Food", "Transport").
    pub category: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

/// An unvalidated transaction as submitted by a caller.
///
/// Validation happens here, at the boundary. The insight engine and the
/// auto-save policy assume validated input and never re-check it.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTransaction {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<()> {
        if !self.amount.is_finite() {
            return Err(Error::InvalidAmount(format!(
                "amount must be a finite number, got {}",
                self.amount
            )));
        }
        if self.amount <= 0.0 {
            return Err(Error::InvalidAmount(format!(
                "amount must be positive, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}

/// A savings goal. Stored in the ledger for display; the insight engine
/// does not consume goals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: i64,
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub color: String,
}

/// A new goal as submitted by a caller.
#[derive(Debug, Clone, Deserialize)]
pub struct NewGoal {
    pub name: String,
    pub target: f64,
    #[serde(default = "default_goal_color")]
    pub color: String,
}

fn default_goal_color() -> String {
    "#6366F1".to_string()
}

impl NewGoal {
    pub fn validate(&self) -> Result<()> {
        if !self.target.is_finite() || self.target <= 0.0 {
            return Err(Error::InvalidAmount(format!(
                "goal target must be positive, got {}",
                self.target
            )));
        }
        Ok(())
    }
}

/// The full ledger snapshot: every transaction plus the monthly budget
/// ceiling and the accumulated auto-saved balance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    pub budget: f64,
    pub savings_pocket: f64,
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl Ledger {
    /// A small demo ledger used by `fintrack init --demo` and in tests.
    pub fn demo() -> Self {
        Self {
            transactions: vec![
                Transaction {
                    id: 1,
                    title: "Grocery Shopping".to_string(),
                    amount: 1200.0,
                    category: "Food".to_string(),
                    date: NaiveDate::from_ymd_opt(2023, 10, 24).unwrap(),
                    kind: TransactionKind::Expense,
                },
                Transaction {
                    id: 2,
                    title: "Uber Ride".to_string(),
                    amount: 350.0,
                    category: "Transport".to_string(),
                    date: NaiveDate::from_ymd_opt(2023, 10, 25).unwrap(),
                    kind: TransactionKind::Expense,
                },
                Transaction {
                    id: 3,
                    title: "Freelance Payment".to_string(),
                    amount: 15000.0,
                    category: "Income".to_string(),
                    date: NaiveDate::from_ymd_opt(2023, 10, 26).unwrap(),
                    kind: TransactionKind::Income,
                },
            ],
            budget: 20000.0,
            savings_pocket: 2450.0,
            goals: vec![
                Goal {
                    id: 1,
                    name: "New Laptop".to_string(),
                    target: 80000.0,
                    current: 15000.0,
                    color: "#6366F1".to_string(),
                },
                Goal {
                    id: 2,
                    name: "Emergency Fund".to_string(),
                    target: 50000.0,
                    current: 20000.0,
                    color: "#10B981".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_transaction_kind_parsing() {
        assert_eq!(
            TransactionKind::from_str("expense").unwrap(),
            TransactionKind::Expense
        );
        assert_eq!(
            TransactionKind::from_str("INCOME").unwrap(),
            TransactionKind::Income
        );
        assert!(matches!(
            TransactionKind::from_str("transfer"),
            Err(Error::InvalidTransactionType(_))
        ));
    }

    #[test]
    fn test_transaction_kind_serializes_lowercase() {
        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
    }

    #[test]
    fn test_new_transaction_rejects_non_positive_amount() {
        let mut tx = NewTransaction {
            title: "Coffee".to_string(),
            amount: 0.0,
            category: "Food".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            kind: TransactionKind::Expense,
        };
        assert!(matches!(tx.validate(), Err(Error::InvalidAmount(_))));

        tx.amount = -50.0;
        assert!(matches!(tx.validate(), Err(Error::InvalidAmount(_))));

        tx.amount = f64::NAN;
        assert!(matches!(tx.validate(), Err(Error::InvalidAmount(_))));

        tx.amount = 50.0;
        assert!(tx.validate().is_ok());
    }

    #[test]
    fn test_transaction_kind_field_named_type_in_json() {
        let tx = &Ledger::demo().transactions[0];
        let json = serde_json::to_value(tx).unwrap();
        assert_eq!(json["type"], "expense");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_default_ledger_is_empty() {
        let ledger = Ledger::default();
        assert!(ledger.transactions.is_empty());
        assert_eq!(ledger.budget, 0.0);
        assert_eq!(ledger.savings_pocket, 0.0);
        assert!(ledger.goals.is_empty());
    }

    #[test]
    fn test_ledger_round_trips_through_json() {
        let ledger = Ledger::demo();
        let json = serde_json::to_string(&ledger).unwrap();
        let back: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(back.transactions.len(), 3);
        assert_eq!(back.budget, 20000.0);
        assert_eq!(back.savings_pocket, 2450.0);
        assert_eq!(back.goals.len(), 2);
    }
}
