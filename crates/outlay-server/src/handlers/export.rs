//! Export handlers

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, Response, StatusCode},
};
use serde::Deserialize;
use tracing::info;

use crate::{AppError, AppState};
use outlay_core::{expenses_to_csv, expenses_to_json, ExportFormat};

/// Query parameters for expense export
#[derive(Debug, Deserialize)]
pub struct ExpenseExportQuery {
    /// Output format (default: csv)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "csv".to_string()
}

/// GET /api/export/expenses - Export expenses to CSV or JSON
pub async fn export_expenses(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ExpenseExportQuery>,
) -> Result<Response<Body>, AppError> {
    let format: ExportFormat = params
        .format
        .parse()
        .map_err(|e: String| AppError::bad_request(&e))?;

    let expenses = state.store.list_expenses();

    match format {
        ExportFormat::Csv => {
            let csv = expenses_to_csv(&expenses);
            info!("Exported {} expenses to CSV", expenses.len());

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/csv; charset=utf-8")
                .header(
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"expenses.csv\"",
                )
                .body(Body::from(csv))
                .map_err(|e| AppError::internal(&e.to_string()))
        }
        ExportFormat::Json => {
            let json = expenses_to_json(&expenses).map_err(AppError::from_core)?;
            info!("Exported {} expenses to JSON", expenses.len());

            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "application/json")
                .header(
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"expenses.json\"",
                )
                .body(Body::from(json))
                .map_err(|e| AppError::internal(&e.to_string()))
        }
    }
}
