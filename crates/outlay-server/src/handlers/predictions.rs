//! Prediction handler

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::AppState;
use outlay_core::{forecast_next_month, Forecast};

/// GET /api/predict/next-month - Naive next-month spending forecast
///
/// Insufficient history is reported as `success: false` in a 200 response;
/// it is an expected state for new users, not a request failure.
pub async fn predict_next_month(State(state): State<Arc<AppState>>) -> Json<Forecast> {
    let expenses = state.store.list_expenses();
    Json(forecast_next_month(&expenses))
}
