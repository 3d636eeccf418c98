//! Settings handlers: monthly budget and user profile

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::{AppError, AppState, MessageResponse};
use outlay_core::{Profile, Settings};

/// GET /api/settings - Current budget and profile
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<Settings> {
    Json(state.settings.snapshot())
}

/// Request body for updating the monthly budget
#[derive(Debug, Deserialize)]
pub struct UpdateBudgetRequest {
    pub monthly_budget: f64,
}

/// PUT /api/settings/budget - Set the monthly budget (last write wins)
pub async fn update_budget(
    State(state): State<Arc<AppState>>,
    Json(req): Json<UpdateBudgetRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .settings
        .set_monthly_budget(req.monthly_budget)
        .map_err(AppError::from_core)?;
    Ok(Json(MessageResponse::new("Budget updated successfully")))
}

/// PUT /api/settings/profile - Replace the user profile (last write wins)
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(req): Json<Profile>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .settings
        .set_profile(req)
        .map_err(AppError::from_core)?;
    Ok(Json(MessageResponse::new("Profile updated successfully")))
}
