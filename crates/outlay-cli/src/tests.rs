//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::io::Write;

use outlay_core::ExportFormat;
use tempfile::NamedTempFile;

use crate::commands::{self, truncate};

const EXPENSES_JSON: &str = r#"[
    { "title": "Lunch", "amount": 120.5, "category": "Food & Drinks", "date": "2026-01-05" },
    { "title": "Dinner, with drinks", "amount": 310.25, "category": "Food & Drinks", "date": "2026-01-08" },
    { "title": "Metro card top-up", "amount": 899.0, "category": "Transportation", "date": "2026-02-02" }
]"#;

fn write_expense_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

// ========== Loading ==========

#[test]
fn test_load_expenses() {
    let file = write_expense_file(EXPENSES_JSON);
    let expenses = commands::load_expenses(file.path()).unwrap();
    assert_eq!(expenses.len(), 3);
    assert_eq!(expenses[0].title, "Lunch");
    // Ids are optional in external expense files
    assert!(expenses[0].id.is_empty());
}

#[test]
fn test_load_expenses_missing_file() {
    let result = commands::load_expenses(std::path::Path::new("/no/such/file.json"));
    assert!(result.is_err());
}

#[test]
fn test_load_expenses_rejects_non_array() {
    let file = write_expense_file(r#"{ "expenses": [] }"#);
    let result = commands::load_expenses(file.path());
    assert!(result.is_err());
}

#[test]
fn test_load_catalog_defaults_to_builtin() {
    let catalog = commands::load_catalog(None).unwrap();
    assert!(!catalog.is_empty());
}

#[test]
fn test_load_catalog_from_file() {
    let file = write_expense_file(
        r#"{ "products": [ { "id": "x1", "name": "Test Kettle", "category": "Others", "price": 12.5 } ] }"#,
    );
    let catalog = commands::load_catalog(Some(file.path())).unwrap();
    assert_eq!(catalog.len(), 1);
}

// ========== Report Commands ==========

#[test]
fn test_cmd_report_category() {
    let file = write_expense_file(EXPENSES_JSON);
    let expenses = commands::load_expenses(file.path()).unwrap();
    assert!(commands::cmd_report_category(&expenses).is_ok());
}

#[test]
fn test_cmd_report_monthly() {
    let file = write_expense_file(EXPENSES_JSON);
    let expenses = commands::load_expenses(file.path()).unwrap();
    assert!(commands::cmd_report_monthly(&expenses).is_ok());
}

#[test]
fn test_cmd_report_empty() {
    assert!(commands::cmd_report_category(&[]).is_ok());
    assert!(commands::cmd_report_monthly(&[]).is_ok());
}

// ========== Recommend Command ==========

#[test]
fn test_cmd_recommend_with_builtin_catalog() {
    let file = write_expense_file(
        r#"[ { "title": "Wireless Mouse", "amount": 1500, "category": "Shopping", "date": "2026-01-10" } ]"#,
    );
    let expenses = commands::load_expenses(file.path()).unwrap();
    let catalog = commands::load_catalog(None).unwrap();
    assert!(commands::cmd_recommend(&expenses, &catalog).is_ok());
}

// ========== Predict Command ==========

#[test]
fn test_cmd_predict_handles_thin_history() {
    let file = write_expense_file(
        r#"[ { "title": "Lunch", "amount": 120.5, "category": "Food & Drinks", "date": "2026-01-05" } ]"#,
    );
    let expenses = commands::load_expenses(file.path()).unwrap();
    assert!(commands::cmd_predict(&expenses).is_ok());
}

#[test]
fn test_cmd_predict_with_history() {
    let file = write_expense_file(EXPENSES_JSON);
    let expenses = commands::load_expenses(file.path()).unwrap();
    assert!(commands::cmd_predict(&expenses).is_ok());
}

// ========== Export Command ==========

#[test]
fn test_cmd_export_csv_to_file() {
    let file = write_expense_file(EXPENSES_JSON);
    let expenses = commands::load_expenses(file.path()).unwrap();

    let output = NamedTempFile::new().unwrap();
    commands::cmd_export(&expenses, Some(output.path()), ExportFormat::Csv, false).unwrap();

    let csv = std::fs::read_to_string(output.path()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "date,title,amount,category,description");
    assert_eq!(lines.len(), 4);
    // Comma-bearing titles get quoted
    assert!(csv.contains("\"Dinner, with drinks\""));
}

#[test]
fn test_cmd_export_json_to_file() {
    let file = write_expense_file(EXPENSES_JSON);
    let expenses = commands::load_expenses(file.path()).unwrap();

    let output = NamedTempFile::new().unwrap();
    commands::cmd_export(&expenses, Some(output.path()), ExportFormat::Json, false).unwrap();

    let json = std::fs::read_to_string(output.path()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 3);
}

#[test]
fn test_cmd_export_category_summary() {
    let file = write_expense_file(EXPENSES_JSON);
    let expenses = commands::load_expenses(file.path()).unwrap();

    let output = NamedTempFile::new().unwrap();
    commands::cmd_export(&expenses, Some(output.path()), ExportFormat::Csv, true).unwrap();

    let csv = std::fs::read_to_string(output.path()).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], "category,total,count,average");
    // Transportation total is larger, so it sorts first
    assert_eq!(lines[1], "Transportation,899.00,1,899.00");
    assert_eq!(lines[2], "Food & Drinks,430.75,2,215.38");
}

#[test]
fn test_cmd_export_summary_rejects_json() {
    let file = write_expense_file(EXPENSES_JSON);
    let expenses = commands::load_expenses(file.path()).unwrap();
    let result = commands::cmd_export(&expenses, None, ExportFormat::Json, true);
    assert!(result.is_err());
}

// ========== Helpers ==========

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a very long category name", 10), "a very ...");
}
