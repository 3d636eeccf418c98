//! Outlay Core Library
//!
//! Shared functionality for the Outlay expense tracker:
//! - Domain models for expenses, categories, and catalog products
//! - Category and monthly aggregation for dashboards and exports
//! - Heuristic product recommendations over a static catalog
//! - Naive next-month spending forecast
//! - In-memory expense/category store and explicit settings store
//! - CSV/JSON export

pub mod aggregate;
pub mod catalog;
pub mod error;
pub mod export;
pub mod forecast;
pub mod models;
pub mod recommend;
pub mod settings;
pub mod store;

pub use aggregate::{aggregate_by_category, aggregate_by_month, round_cents, UNCATEGORIZED};
pub use catalog::Catalog;
pub use error::{Error, Result};
pub use export::{category_summary_csv, expenses_to_csv, expenses_to_json, ExportFormat};
pub use forecast::forecast_next_month;
pub use models::{
    Category, CategoryAggregate, Confidence, Expense, Forecast, MonthlyAggregate, NewCategory,
    NewExpense, Product, Profile, Recommendation, RelatedExpense, Settings, Trend, UpdateExpense,
};
pub use recommend::{recommend, similarity};
pub use settings::SettingsStore;
pub use store::Store;
