//! Export functionality for expenses and aggregation rows
//!
//! Supports:
//! - Expense CSV export (date, title, amount, category, description)
//! - Category summary CSV export (category, total, count, average)
//! - JSON export of the raw expense list

use std::str::FromStr;

use crate::error::Result;
use crate::models::{CategoryAggregate, Expense};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {} (use csv or json)", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render expenses as CSV, most useful straight from `Store::list_expenses`
pub fn expenses_to_csv(expenses: &[Expense]) -> String {
    let mut csv = String::from("date,title,amount,category,description\n");

    for expense in expenses {
        csv.push_str(&format!(
            "{},{},{:.2},{},{}\n",
            escape_csv_field(&expense.date),
            escape_csv_field(&expense.title),
            expense.amount,
            escape_csv_field(&expense.category),
            escape_csv_field(&expense.description),
        ));
    }

    csv
}

/// Render category aggregation rows as CSV
pub fn category_summary_csv(rows: &[CategoryAggregate]) -> String {
    let mut csv = String::from("category,total,count,average\n");

    for row in rows {
        csv.push_str(&format!(
            "{},{:.2},{},{:.2}\n",
            escape_csv_field(&row.category),
            row.total,
            row.count,
            row.average,
        ));
    }

    csv
}

/// Render expenses as pretty-printed JSON
pub fn expenses_to_json(expenses: &[Expense]) -> Result<String> {
    Ok(serde_json::to_string_pretty(expenses)?)
}

fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
