//! List state for the expenses and incomes screens.
//!
//! DESIGN
//! ======
//! The two screens are structurally identical, so they share one generic
//! list-state shape parameterized by the record type. `filtered` records
//! whether the current items came from a `/filter` query, so a clear-filter
//! control knows when to re-fetch the full list.

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

use crate::net::types::{Expense, Income};

/// Shared list state for a transaction screen.
#[derive(Clone, Debug)]
pub struct TransactionListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
    /// Whether `items` reflects an active filter query.
    pub filtered: bool,
}

impl<T> Default for TransactionListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None, filtered: false }
    }
}

impl<T> TransactionListState<T> {
    /// Replace the items after a successful fetch.
    pub fn loaded(&mut self, items: Vec<T>, filtered: bool) {
        self.items = items;
        self.loading = false;
        self.error = None;
        self.filtered = filtered;
    }

    /// Record a failed fetch without discarding what is on screen.
    pub fn failed(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }
}

pub type ExpensesState = TransactionListState<Expense>;
pub type IncomesState = TransactionListState<Income>;
