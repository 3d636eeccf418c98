//! Report command implementations

use anyhow::Result;

use outlay_core::{aggregate_by_category, aggregate_by_month, Expense};

use super::truncate;

pub fn cmd_report_category(expenses: &[Expense]) -> Result<()> {
    let rows = aggregate_by_category(expenses);

    println!();
    println!("📊 Spending by Category");
    println!("   ─────────────────────────────────────────────────────────");

    if rows.is_empty() {
        println!("   No expenses found.");
        return Ok(());
    }

    let total: f64 = rows.iter().map(|r| r.total).sum();
    println!("   Total: {:.2} across {} expense(s)", total, expenses.len());
    println!();
    println!(
        "   {:25} │ {:>10} │ {:>5} │ {:>10}",
        "Category", "Total", "Count", "Average"
    );
    println!("   ──────────────────────────┼────────────┼───────┼────────────");

    for row in &rows {
        println!(
            "   {:25} │ {:>10.2} │ {:>5} │ {:>10.2}",
            truncate(&row.category, 25),
            row.total,
            row.count,
            row.average
        );
    }

    Ok(())
}

pub fn cmd_report_monthly(expenses: &[Expense]) -> Result<()> {
    let rows = aggregate_by_month(expenses);

    println!();
    println!("📅 Spending by Month");
    println!("   ───────────────────────────────────");

    if rows.is_empty() {
        println!("   No expenses with usable dates found.");
        return Ok(());
    }

    println!("   {:7} │ {:>10} │ {:>5}", "Month", "Total", "Count");
    println!("   ────────┼────────────┼───────");

    for row in &rows {
        println!(
            "   {:7} │ {:>10.2} │ {:>5}",
            row.month, row.total, row.count
        );
    }

    let skipped = expenses.len() - rows.iter().map(|r| r.count).sum::<usize>();
    if skipped > 0 {
        println!();
        println!("   {} expense(s) skipped (unparseable date)", skipped);
    }

    Ok(())
}
