//! Product recommendations
//!
//! Scans the static catalog for cheaper alternatives to recorded expenses.
//! A product matches an expense when the categories are equal
//! (case-insensitively), the product name is textually related to the
//! expense title, and the product is strictly cheaper.

use std::collections::HashMap;

use crate::models::{Expense, Product, Recommendation, RelatedExpense};

/// Minimum similarity score for a product name to count as related
const SIMILARITY_CUTOFF: f64 = 0.3;

/// Heuristic text similarity in {0.8, 0.5, 0.0}.
///
/// Case-folds both strings, then: containment either way scores 0.8; any
/// shared word after splitting on single spaces scores 0.5; otherwise 0.0.
/// Not a metric, and deliberately crude: punctuation-adjacent or
/// multi-space-separated words never match. Known limitation, kept as-is
/// because the recommendation contract depends on these exact scores.
pub fn similarity(s1: &str, s2: &str) -> f64 {
    let s1 = s1.to_lowercase();
    let s2 = s2.to_lowercase();

    if s1.contains(&s2) || s2.contains(&s1) {
        return 0.8;
    }

    let words1: Vec<&str> = s1.split(' ').collect();
    let words2: Vec<&str> = s2.split(' ').collect();
    if words1.iter().any(|word| words2.contains(word)) {
        return 0.5;
    }

    0.0
}

/// Match every expense against the catalog and return the deduplicated
/// recommendation list.
///
/// Dedup is keyed by product id: a product matched by several expenses
/// appears once, carrying the `related_to` of the last match while keeping
/// the position of its first insertion. Single pass, no re-sorting.
pub fn recommend(expenses: &[Expense], catalog: &[Product]) -> Vec<Recommendation> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut recommendations: Vec<Recommendation> = Vec::new();

    for expense in expenses {
        for product in catalog {
            if product.category.to_lowercase() != expense.category.to_lowercase() {
                continue;
            }
            if similarity(&product.name, &expense.title) <= SIMILARITY_CUTOFF {
                continue;
            }
            if product.price >= expense.amount {
                continue;
            }

            let recommendation = Recommendation {
                id: product.id.clone(),
                name: product.name.clone(),
                category: product.category.clone(),
                price: product.price,
                related_to: RelatedExpense {
                    title: expense.title.clone(),
                    category: expense.category.clone(),
                },
            };

            match positions.get(product.id.as_str()) {
                Some(&idx) => recommendations[idx] = recommendation,
                None => {
                    positions.insert(product.id.as_str(), recommendations.len());
                    recommendations.push(recommendation);
                }
            }
        }
    }

    recommendations
}
