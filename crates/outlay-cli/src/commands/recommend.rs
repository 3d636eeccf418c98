//! Recommendation command implementation

use anyhow::Result;

use outlay_core::{recommend, Catalog, Expense};

use super::truncate;

pub fn cmd_recommend(expenses: &[Expense], catalog: &Catalog) -> Result<()> {
    let recommendations = recommend(expenses, catalog.products());

    println!();
    println!("💡 Cheaper Alternatives");
    println!("   ──────────────────────────────────────────────────────────────");

    if recommendations.is_empty() {
        println!("   No cheaper alternatives found in the catalog.");
        return Ok(());
    }

    println!(
        "   {:30} │ {:>8} │ {}",
        "Product", "Price", "Related expense"
    );
    println!("   ───────────────────────────────┼──────────┼──────────────────");

    for rec in &recommendations {
        println!(
            "   {:30} │ {:>8.2} │ {}",
            truncate(&rec.name, 30),
            rec.price,
            truncate(&rec.related_to.title, 25)
        );
    }

    println!();
    println!("   {} recommendation(s) found", recommendations.len());

    Ok(())
}
