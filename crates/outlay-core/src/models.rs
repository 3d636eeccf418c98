//! Domain models for Outlay

use serde::{Deserialize, Serialize};

/// A recorded expense
///
/// Expenses are immutable from the computation layer's point of view: the
/// aggregator, recommender, and forecaster only ever read them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Opaque string id. Optional on input so that externally supplied
    /// expense lists (e.g. the recommendation request body) deserialize
    /// without one.
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: String,
    /// ISO-8601 date or datetime string. Not validated on write; monthly
    /// grouping excludes values it cannot bucket.
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request body for creating an expense
#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    pub title: String,
    pub amount: f64,
    pub category: String,
    /// Defaults to the current timestamp when omitted
    pub date: Option<String>,
    #[serde(default)]
    pub description: String,
}

/// Request body for updating an expense
///
/// Updates replace the expense's user-facing fields wholesale (last write
/// wins); `created_at` is preserved and `updated_at` stamped.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateExpense {
    pub title: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
    #[serde(default)]
    pub description: String,
}

/// A user-defined expense category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Request body for creating a category
#[derive(Debug, Clone, Deserialize)]
pub struct NewCategory {
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

/// A catalog product. Read-only reference data, loaded once at process
/// start and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
}

/// The expense that caused a product to be recommended
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedExpense {
    pub title: String,
    pub category: String,
}

/// A catalog product recommended as a cheaper alternative to an expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    #[serde(rename = "relatedTo")]
    pub related_to: RelatedExpense,
}

/// Per-category aggregation row
///
/// `average == total / count` to 2-decimal precision when `count > 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAggregate {
    pub category: String,
    pub total: f64,
    pub count: usize,
    pub average: f64,
}

/// Per-month aggregation row, keyed by `YYYY-MM`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub month: String,
    pub total: f64,
    pub count: usize,
}

/// Forecast confidence, driven by how many months of history were available
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Spending trend direction derived from the fitted slope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Increasing,
    Decreasing,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
        }
    }
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Next-month spending forecast
///
/// On insufficient history only `success`, `message`, `prediction`, and
/// `confidence` are populated, matching the shape consumers expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Forecast {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub prediction: f64,
    pub confidence: Confidence,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slope: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_monthly: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_month: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_points: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_months: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub historical_totals: Option<Vec<f64>>,
}

impl Forecast {
    /// Forecast reporting that there was not enough history to fit a line
    pub fn insufficient(message: &str) -> Self {
        Self {
            success: false,
            message: Some(message.to_string()),
            prediction: 0.0,
            confidence: Confidence::Low,
            trend: None,
            slope: None,
            average_monthly: None,
            last_month: None,
            data_points: None,
            historical_months: None,
            historical_totals: None,
        }
    }
}

/// User profile, kept in the settings store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: String,
    #[serde(rename = "dateOfBirth", default)]
    pub date_of_birth: String,
}

/// Snapshot of the settings store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub monthly_budget: Option<f64>,
    pub profile: Option<Profile>,
}
