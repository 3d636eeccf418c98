//! Analytics handlers: summary and dashboard aggregations

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;
use outlay_core::{aggregate_by_category, round_cents, CategoryAggregate};

/// Response for GET /api/analytics/summary
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub total_expenses: usize,
    pub total_amount: f64,
    pub by_category: Vec<CategoryAggregate>,
}

/// GET /api/analytics/summary - Expense totals and category breakdown
pub async fn analytics_summary(State(state): State<Arc<AppState>>) -> Json<SummaryResponse> {
    let expenses = state.store.list_expenses();
    let by_category = aggregate_by_category(&expenses);
    let total_amount = round_cents(expenses.iter().map(|e| e.amount).sum());

    Json(SummaryResponse {
        total_expenses: expenses.len(),
        total_amount,
        by_category,
    })
}

/// Response for GET /api/dashboard
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub total_expenses: usize,
    pub total_amount: f64,
    /// Number of distinct spending categories
    pub categories: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<f64>,
}

/// GET /api/dashboard - The stat-card numbers: totals, category count,
/// budget, and what's left of it
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardResponse> {
    let expenses = state.store.list_expenses();
    let by_category = aggregate_by_category(&expenses);
    let total_amount = round_cents(expenses.iter().map(|e| e.amount).sum());

    let monthly_budget = state.settings.monthly_budget();
    let remaining = monthly_budget.map(|budget| round_cents(budget - total_amount));

    Json(DashboardResponse {
        total_expenses: expenses.len(),
        total_amount,
        categories: by_category.len(),
        monthly_budget,
        remaining,
    })
}
