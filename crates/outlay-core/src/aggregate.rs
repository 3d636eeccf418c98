//! Expense aggregation
//!
//! Groups expense records by category or by month and computes the sums,
//! counts, and averages that the dashboard and CSV export display. Pure
//! functions over their inputs; absence of data yields an empty result,
//! never a failure.

use std::collections::HashMap;

use crate::models::{CategoryAggregate, Expense, MonthlyAggregate};

/// Catch-all bucket for expenses with a missing or empty category
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Round a monetary amount to 2 decimal places.
///
/// Multiply/round/divide by 100; `f64::round` rounds ties away from zero.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Group expenses by category, summing amounts and counting records.
///
/// Rows are ordered by descending total; ties keep first-encountered order.
/// Amount sign and date format are not validated.
pub fn aggregate_by_category(expenses: &[Expense]) -> Vec<CategoryAggregate> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<(String, f64, usize)> = Vec::new();

    for expense in expenses {
        let category = if expense.category.trim().is_empty() {
            UNCATEGORIZED.to_string()
        } else {
            expense.category.clone()
        };

        match positions.get(&category) {
            Some(&idx) => {
                buckets[idx].1 += expense.amount;
                buckets[idx].2 += 1;
            }
            None => {
                positions.insert(category.clone(), buckets.len());
                buckets.push((category, expense.amount, 1));
            }
        }
    }

    let mut rows: Vec<CategoryAggregate> = buckets
        .into_iter()
        .map(|(category, sum, count)| {
            let total = round_cents(sum);
            let average = if count > 0 {
                round_cents(sum / count as f64)
            } else {
                0.0
            };
            CategoryAggregate {
                category,
                total,
                count,
                average,
            }
        })
        .collect();

    // sort_by is stable, so equal totals keep insertion order
    rows.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

/// Group expenses into monthly totals keyed by `YYYY-MM`, sorted
/// chronologically.
///
/// Expenses whose date does not start with a valid `YYYY-MM` prefix are
/// excluded from the result.
pub fn aggregate_by_month(expenses: &[Expense]) -> Vec<MonthlyAggregate> {
    let mut buckets: HashMap<String, (f64, usize)> = HashMap::new();

    for expense in expenses {
        let Some(month) = month_key(&expense.date) else {
            continue;
        };
        let entry = buckets.entry(month).or_insert((0.0, 0));
        entry.0 += expense.amount;
        entry.1 += 1;
    }

    let mut rows: Vec<MonthlyAggregate> = buckets
        .into_iter()
        .map(|(month, (sum, count))| MonthlyAggregate {
            month,
            total: round_cents(sum),
            count,
        })
        .collect();

    rows.sort_by(|a, b| a.month.cmp(&b.month));
    rows
}

/// Extract the `YYYY-MM` bucket key from an ISO-8601 date string
fn month_key(date: &str) -> Option<String> {
    let prefix = date.get(..7)?;
    let (year, month) = prefix.split_once('-')?;
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if month.len() != 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !(1..=12).contains(&month.parse::<u32>().ok()?) {
        return None;
    }
    Some(prefix.to_string())
}
