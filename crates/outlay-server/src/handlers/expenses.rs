//! Expense CRUD handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::{AppError, AppState, MessageResponse};
use outlay_core::{Expense, NewExpense, UpdateExpense};

/// GET /api/expenses - List all expenses, most recent date first
pub async fn list_expenses(State(state): State<Arc<AppState>>) -> Json<Vec<Expense>> {
    Json(state.store.list_expenses())
}

/// GET /api/expenses/:id - Get a single expense
pub async fn get_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Expense>, AppError> {
    let expense = state.store.get_expense(&id).map_err(AppError::from_core)?;
    Ok(Json(expense))
}

/// POST /api/expenses - Create a new expense
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewExpense>,
) -> (StatusCode, Json<Expense>) {
    let expense = state.store.create_expense(req);
    info!(id = %expense.id, title = %expense.title, "Created expense");
    (StatusCode::CREATED, Json(expense))
}

/// PUT /api/expenses/:id - Update an expense (last write wins)
pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateExpense>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .store
        .update_expense(&id, req)
        .map_err(AppError::from_core)?;
    Ok(Json(MessageResponse::new("Expense updated successfully")))
}

/// DELETE /api/expenses/:id - Delete an expense
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .store
        .delete_expense(&id)
        .map_err(AppError::from_core)?;
    Ok(Json(MessageResponse::new("Expense deleted successfully")))
}
