//! In-memory expense and category store
//!
//! Process-local storage with last-write-wins semantics and no durability:
//! restarting the process empties the store. Handles are cheap to clone and
//! all clones observe the same data; a `RwLock` serializes writers while
//! letting readers share.

use std::sync::{Arc, RwLock};

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::{Category, Expense, NewCategory, NewExpense, UpdateExpense};

/// Default icon for categories created without one
const DEFAULT_CATEGORY_ICON: &str = "📁";

/// Default color for categories created without one
const DEFAULT_CATEGORY_COLOR: &str = "#000000";

#[derive(Default)]
struct StoreInner {
    expenses: Vec<Expense>,
    categories: Vec<Category>,
}

/// Shared handle to the in-memory store
#[derive(Clone, Default)]
pub struct Store {
    inner: Arc<RwLock<StoreInner>>,
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// List all expenses, most recent date first
    pub fn list_expenses(&self) -> Vec<Expense> {
        let inner = self.inner.read().unwrap();
        let mut expenses = inner.expenses.clone();
        // ISO-8601 strings order lexicographically
        expenses.sort_by(|a, b| b.date.cmp(&a.date));
        expenses
    }

    pub fn count_expenses(&self) -> usize {
        self.inner.read().unwrap().expenses.len()
    }

    pub fn get_expense(&self, id: &str) -> Result<Expense> {
        let inner = self.inner.read().unwrap();
        inner
            .expenses
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| Error::NotFound(format!("Expense {} not found", id)))
    }

    pub fn create_expense(&self, new: NewExpense) -> Expense {
        let now = now_iso();
        let expense = Expense {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            amount: new.amount,
            category: new.category,
            date: new.date.unwrap_or_else(|| now.clone()),
            description: new.description,
            created_at: Some(now),
            updated_at: None,
        };

        let mut inner = self.inner.write().unwrap();
        inner.expenses.push(expense.clone());
        expense
    }

    /// Replace an expense's user-facing fields; last write wins
    pub fn update_expense(&self, id: &str, update: UpdateExpense) -> Result<Expense> {
        let mut inner = self.inner.write().unwrap();
        let expense = inner
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| Error::NotFound(format!("Expense {} not found", id)))?;

        expense.title = update.title;
        expense.amount = update.amount;
        expense.category = update.category;
        expense.date = update.date;
        expense.description = update.description;
        expense.updated_at = Some(now_iso());

        Ok(expense.clone())
    }

    pub fn delete_expense(&self, id: &str) -> Result<()> {
        let mut inner = self.inner.write().unwrap();
        let before = inner.expenses.len();
        inner.expenses.retain(|e| e.id != id);
        if inner.expenses.len() == before {
            return Err(Error::NotFound(format!("Expense {} not found", id)));
        }
        Ok(())
    }

    /// List categories in creation order
    pub fn list_categories(&self) -> Vec<Category> {
        self.inner.read().unwrap().categories.clone()
    }

    pub fn create_category(&self, new: NewCategory) -> Category {
        let category = Category {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            icon: new.icon.unwrap_or_else(|| DEFAULT_CATEGORY_ICON.to_string()),
            color: new
                .color
                .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
            created_at: now_iso(),
        };

        let mut inner = self.inner.write().unwrap();
        inner.categories.push(category.clone());
        category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_expense(title: &str, amount: f64, date: &str) -> NewExpense {
        NewExpense {
            title: title.to_string(),
            amount,
            category: "Food".to_string(),
            date: Some(date.to_string()),
            description: String::new(),
        }
    }

    #[test]
    fn test_create_assigns_id_and_created_at() {
        let store = Store::new();
        let expense = store.create_expense(new_expense("Lunch", 120.0, "2026-01-05"));

        assert!(!expense.id.is_empty());
        assert!(expense.created_at.is_some());
        assert!(expense.updated_at.is_none());
        assert_eq!(store.count_expenses(), 1);
    }

    #[test]
    fn test_create_defaults_date_to_now() {
        let store = Store::new();
        let expense = store.create_expense(NewExpense {
            title: "Lunch".to_string(),
            amount: 120.0,
            category: "Food".to_string(),
            date: None,
            description: String::new(),
        });
        assert!(!expense.date.is_empty());
    }

    #[test]
    fn test_list_sorts_by_date_descending() {
        let store = Store::new();
        store.create_expense(new_expense("old", 1.0, "2025-11-01"));
        store.create_expense(new_expense("new", 2.0, "2026-02-01"));
        store.create_expense(new_expense("mid", 3.0, "2026-01-01"));

        let titles: Vec<String> = store
            .list_expenses()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_update_replaces_fields_and_stamps_updated_at() {
        let store = Store::new();
        let expense = store.create_expense(new_expense("Lunch", 120.0, "2026-01-05"));

        let updated = store
            .update_expense(
                &expense.id,
                UpdateExpense {
                    title: "Team Lunch".to_string(),
                    amount: 480.0,
                    category: "Food & Drinks".to_string(),
                    date: "2026-01-06".to_string(),
                    description: "four people".to_string(),
                },
            )
            .unwrap();

        assert_eq!(updated.title, "Team Lunch");
        assert_eq!(updated.amount, 480.0);
        assert_eq!(updated.created_at, expense.created_at);
        assert!(updated.updated_at.is_some());
    }

    #[test]
    fn test_get_update_delete_unknown_id_is_not_found() {
        let store = Store::new();
        assert!(matches!(
            store.get_expense("missing"),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            store.delete_expense("missing"),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            store.update_expense(
                "missing",
                UpdateExpense {
                    title: "t".to_string(),
                    amount: 1.0,
                    category: "c".to_string(),
                    date: "2026-01-01".to_string(),
                    description: String::new(),
                },
            ),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_removes_expense() {
        let store = Store::new();
        let expense = store.create_expense(new_expense("Lunch", 120.0, "2026-01-05"));
        store.delete_expense(&expense.id).unwrap();
        assert_eq!(store.count_expenses(), 0);
    }

    #[test]
    fn test_clones_share_data() {
        let store = Store::new();
        let clone = store.clone();
        store.create_expense(new_expense("Lunch", 120.0, "2026-01-05"));
        assert_eq!(clone.count_expenses(), 1);
    }

    #[test]
    fn test_category_defaults() {
        let store = Store::new();
        let category = store.create_category(NewCategory {
            name: "Travel".to_string(),
            icon: None,
            color: None,
        });

        assert_eq!(category.icon, DEFAULT_CATEGORY_ICON);
        assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
        assert_eq!(store.list_categories().len(), 1);
    }
}
