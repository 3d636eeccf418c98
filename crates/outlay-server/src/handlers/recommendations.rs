//! Recommendation handler

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::{AppError, AppState};
use outlay_core::{recommend, Expense, Recommendation};

/// Response for POST /api/recommendations
#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
    #[serde(rename = "totalRecommendations")]
    pub total_recommendations: usize,
}

/// POST /api/recommendations - Match the submitted expenses against the
/// catalog
///
/// The body is validated by hand rather than through a typed extractor so
/// that a missing or non-array `expenses` field yields the contract's 400
/// `{ error }` response, with no partial output.
pub async fn generate_recommendations(
    State(state): State<Arc<AppState>>,
    body: Option<Json<serde_json::Value>>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let Some(Json(body)) = body else {
        return Err(AppError::bad_request("Invalid expenses data"));
    };

    let Some(expenses_value) = body.get("expenses").filter(|v| v.is_array()) else {
        return Err(AppError::bad_request("Invalid expenses data"));
    };

    // An element missing required fields is a caller contract violation
    let expenses: Vec<Expense> = serde_json::from_value(expenses_value.clone())
        .map_err(|_| AppError::bad_request("Invalid expenses data"))?;

    let recommendations = recommend(&expenses, state.catalog.products());
    info!(
        expenses = expenses.len(),
        recommendations = recommendations.len(),
        "Generated recommendations"
    );

    Ok(Json(RecommendationsResponse {
        success: true,
        total_recommendations: recommendations.len(),
        recommendations,
    }))
}
