//! Export command implementation

use std::path::Path;

use anyhow::{bail, Context, Result};

use outlay_core::{
    aggregate_by_category, category_summary_csv, expenses_to_csv, expenses_to_json, Expense,
    ExportFormat,
};

pub fn cmd_export(
    expenses: &[Expense],
    output: Option<&Path>,
    format: ExportFormat,
    summary: bool,
) -> Result<()> {
    let content = match (summary, format) {
        (true, ExportFormat::Csv) => category_summary_csv(&aggregate_by_category(expenses)),
        (true, ExportFormat::Json) => bail!("--summary is only available for CSV export"),
        (false, ExportFormat::Csv) => expenses_to_csv(expenses),
        (false, ExportFormat::Json) => expenses_to_json(expenses)?,
    };

    match output {
        Some(path) => {
            std::fs::write(path, &content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "Exported {} expense(s) to {} ({})",
                expenses.len(),
                path.display(),
                format
            );
        }
        None => print!("{}", content),
    }

    Ok(())
}
