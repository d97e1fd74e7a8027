//! Ledger handlers: snapshot, transactions, goals

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::{AppError, AppState};
use fintrack_core::{Goal, Ledger, NewGoal, NewTransaction, RecordedTransaction, Transaction};

/// Response body for a recorded transaction
#[derive(Debug, Serialize)]
pub struct TransactionResponse {
    pub message: &'static str,
    pub transaction: Transaction,
    /// Auto-save contribution credited by this transaction
    pub auto_saved: f64,
    /// Savings pocket balance after the credit
    pub savings_pocket: f64,
}

/// Response body for a created goal
#[derive(Debug, Serialize)]
pub struct GoalResponse {
    pub message: &'static str,
    pub goal: Goal,
}

/// GET /api/data - the full ledger snapshot
pub async fn get_data(State(state): State<Arc<AppState>>) -> Result<Json<Ledger>, AppError> {
    let ledger = state.service.snapshot()?;
    Ok(Json(ledger))
}

/// POST /api/transactions - record a transaction
///
/// Applies the auto-save policy and returns the contribution alongside
/// the updated savings pocket. Invalid amounts or types are a 400.
pub async fn create_transaction(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewTransaction>,
) -> Result<Json<TransactionResponse>, AppError> {
    let RecordedTransaction {
        transaction,
        auto_saved,
        savings_pocket,
    } = state.service.record(new).map_err(AppError::from_core)?;

    Ok(Json(TransactionResponse {
        message: "Transaction added",
        transaction,
        auto_saved,
        savings_pocket,
    }))
}

/// POST /api/goals - create a savings goal
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(new): Json<NewGoal>,
) -> Result<Json<GoalResponse>, AppError> {
    let goal = state.service.add_goal(new).map_err(AppError::from_core)?;
    Ok(Json(GoalResponse {
        message: "Goal created",
        goal,
    }))
}
