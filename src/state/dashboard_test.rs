use super::*;

fn sample_summary(start: Option<&str>) -> PnlSummary {
    PnlSummary {
        total_income: 1000.0,
        total_expense: 400.0,
        profit_loss: 600.0,
        start_date: start.map(str::to_owned),
        end_date: start.map(|_| "2024-06-30".to_owned()),
    }
}

#[test]
fn default_dashboard_is_empty_and_idle() {
    let state = DashboardState::default();
    assert!(state.summary.is_none());
    assert!(!state.loading);
    assert!(!state.is_ranged());
}

#[test]
fn loaded_stores_summary_and_clears_error() {
    let mut state = DashboardState::default();
    state.error = Some("old".to_owned());
    state.loading = true;
    state.loaded(sample_summary(None));
    assert!(state.summary.is_some());
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert!(!state.is_ranged());
}

#[test]
fn range_summary_is_ranged() {
    let mut state = DashboardState::default();
    state.loaded(sample_summary(Some("2024-01-01")));
    assert!(state.is_ranged());
}

#[test]
fn failed_keeps_previous_summary() {
    let mut state = DashboardState::default();
    state.loaded(sample_summary(None));
    state.failed("backend unavailable".to_owned());
    assert!(state.summary.is_some());
    assert_eq!(state.error.as_deref(), Some("backend unavailable"));
}
