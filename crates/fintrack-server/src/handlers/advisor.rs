//! Advisor handlers

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::{AppError, AppState};
use fintrack_core::AdvisorReport;

/// GET /api/advisor/insights - run the insight engine over current state
///
/// Recomputed on every call; nothing is cached or persisted.
pub async fn get_insights(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AdvisorReport>, AppError> {
    let report = state.service.advise()?;
    Ok(Json(report))
}
