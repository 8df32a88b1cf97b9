//! Aggregations derived from the entry list.
//!
//! Pure functions recomputed from scratch on demand; nothing here caches or
//! mutates. The UI calls these every frame, export and tests call them
//! directly.

use crate::backend::domain::models::entry::{Entry, EntryKind};

/// Total for one expense category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

/// Running balance over all entries: income adds, expense subtracts.
/// Starts at zero and may go negative.
pub fn balance(entries: &[Entry]) -> f64 {
    entries.iter().fold(0.0, |acc, entry| match entry.kind {
        EntryKind::Income => acc + entry.amount,
        EntryKind::Expense => acc - entry.amount,
    })
}

/// Expense totals grouped by category, in first-occurrence order.
///
/// Only expense entries contribute. Categories never seen in an expense do
/// not appear, even when the selector offers them.
pub fn expense_totals_by_category(entries: &[Entry]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for entry in entries {
        if entry.kind != EntryKind::Expense {
            continue;
        }
        let Some(ref category) = entry.category else {
            continue;
        };

        match totals.iter_mut().find(|t| &t.category == category) {
            Some(existing) => existing.total += entry.amount,
            None => totals.push(CategoryTotal {
                category: category.clone(),
                total: entry.amount,
            }),
        }
    }

    totals
}
