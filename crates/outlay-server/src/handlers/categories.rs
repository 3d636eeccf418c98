//! Category handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::AppState;
use outlay_core::{Category, NewCategory};

/// GET /api/categories - List all categories
pub async fn list_categories(State(state): State<Arc<AppState>>) -> Json<Vec<Category>> {
    Json(state.store.list_categories())
}

/// POST /api/categories - Create a new category
pub async fn create_category(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewCategory>,
) -> (StatusCode, Json<Category>) {
    let category = state.store.create_category(req);
    (StatusCode::CREATED, Json(category))
}
