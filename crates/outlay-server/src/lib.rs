//! Outlay Web Server
//!
//! Axum-based REST API for the Outlay expense tracker:
//! - CRUD for expenses and categories over the in-memory store
//! - Category/total analytics and a naive next-month prediction
//! - Product recommendations against the static catalog
//! - Budget/profile settings backed by the explicit settings store
//! - CSV/JSON expense export
//!
//! Errors are sanitized: internal failures are logged server-side and
//! surfaced as a generic `{ "error": ... }` body.

use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info};

use outlay_core::{Catalog, SettingsStore, Store};

mod handlers;

/// Server configuration
#[derive(Clone, Default)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
}

/// Shared application state
pub struct AppState {
    pub store: Store,
    pub catalog: Catalog,
    pub settings: SettingsStore,
}

/// Success response with a human-readable message
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Create the application router
pub fn create_router(
    store: Store,
    catalog: Catalog,
    settings: SettingsStore,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> Router {
    info!("Product catalog loaded: {} products", catalog.len());

    let state = Arc::new(AppState {
        store,
        catalog,
        settings,
    });

    let api_routes = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Expenses
        .route(
            "/expenses",
            get(handlers::list_expenses).post(handlers::create_expense),
        )
        .route(
            "/expenses/:id",
            get(handlers::get_expense)
                .put(handlers::update_expense)
                .delete(handlers::delete_expense),
        )
        // Categories
        .route(
            "/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        // Analytics
        .route("/analytics/summary", get(handlers::analytics_summary))
        .route("/dashboard", get(handlers::get_dashboard))
        // Prediction
        .route("/predict/next-month", get(handlers::predict_next_month))
        // Recommendations
        .route(
            "/recommendations",
            post(handlers::generate_recommendations),
        )
        // Settings
        .route("/settings", get(handlers::get_settings))
        .route("/settings/budget", put(handlers::update_budget))
        .route("/settings/profile", put(handlers::update_profile))
        // Export
        .route("/export/expenses", get(handlers::export_expenses));

    // Build CORS layer
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
    };

    let mut app = Router::new()
        .nest("/api", api_routes)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Serve static files if directory provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server
pub async fn serve(
    store: Store,
    catalog: Catalog,
    settings: SettingsStore,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    let app = create_router(store, catalog, settings, static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn internal(msg: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.to_string(),
            internal: None,
        }
    }

    /// Map a core error onto the HTTP taxonomy: invalid input -> 400,
    /// not found -> 404, everything else -> sanitized 500
    pub fn from_core(err: outlay_core::Error) -> Self {
        match err {
            outlay_core::Error::InvalidInput(msg) => Self::bad_request(&msg),
            outlay_core::Error::NotFound(msg) => Self::not_found(&msg),
            other => Self::from(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
