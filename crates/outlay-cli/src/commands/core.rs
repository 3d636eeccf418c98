//! Shared command utilities

use std::path::Path;

use anyhow::{Context, Result};

use outlay_core::{Catalog, Expense};

/// Load an expense list from a JSON file (an array of expense objects)
pub fn load_expenses(path: &Path) -> Result<Vec<Expense>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let expenses: Vec<Expense> =
        serde_json::from_str(&json).context("Expense file must be a JSON array of expenses")?;
    Ok(expenses)
}

/// Load the catalog from a file, or fall back to the embedded one
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => Ok(Catalog::builtin()),
    }
}
