use super::*;
use crate::net::types::ExpenseCategory;

fn sample_expense(id: i64) -> Expense {
    Expense {
        id,
        description: "Sample".to_owned(),
        category: ExpenseCategory::Personal,
        amount: 100.0,
        date_of_expense: "2024-01-01".to_owned(),
    }
}

#[test]
fn default_list_is_empty_and_idle() {
    let state = ExpensesState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert!(!state.filtered);
}

#[test]
fn loaded_replaces_items_and_clears_error() {
    let mut state = ExpensesState::default();
    state.loading = true;
    state.error = Some("old failure".to_owned());
    state.loaded(vec![sample_expense(1), sample_expense(2)], false);
    assert_eq!(state.items.len(), 2);
    assert!(!state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn loaded_records_filter_provenance() {
    let mut state = ExpensesState::default();
    state.loaded(vec![sample_expense(1)], true);
    assert!(state.filtered);
    state.loaded(vec![sample_expense(1)], false);
    assert!(!state.filtered);
}

#[test]
fn failed_keeps_existing_items_on_screen() {
    let mut state = ExpensesState::default();
    state.loaded(vec![sample_expense(1)], false);
    state.loading = true;
    state.failed("backend unavailable".to_owned());
    assert_eq!(state.items.len(), 1);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("backend unavailable"));
}
