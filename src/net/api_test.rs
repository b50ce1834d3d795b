use super::*;

#[test]
fn expense_path_formats_id() {
    assert_eq!(expense_path(42), "/expenses/42");
}

#[test]
fn income_path_formats_id() {
    assert_eq!(income_path(7), "/incomes/7");
}

// =============================================================
// Filter query building
// =============================================================

#[test]
fn filter_query_empty_for_no_criteria() {
    assert_eq!(filter_query(&FilterParams::default()), "");
}

#[test]
fn filter_query_serializes_only_set_criteria() {
    let filter = FilterParams {
        category: Some("PERSONAL".to_owned()),
        start_date: Some("2024-01-01".to_owned()),
        max_amount: Some(500.0),
        ..FilterParams::default()
    };
    assert_eq!(filter_query(&filter), "category=PERSONAL&startDate=2024-01-01&maxAmount=500");
}

#[test]
fn filter_query_serializes_income_source() {
    let filter = FilterParams {
        source: Some("SALARY".to_owned()),
        min_amount: Some(10.5),
        ..FilterParams::default()
    };
    assert_eq!(filter_query(&filter), "source=SALARY&minAmount=10.5");
}

#[test]
fn filter_path_omits_question_mark_when_empty() {
    assert_eq!(filter_path("/expenses", &FilterParams::default()), "/expenses/filter");
}

#[test]
fn filter_path_appends_query() {
    let filter = FilterParams {
        end_date: Some("2024-12-31".to_owned()),
        ..FilterParams::default()
    };
    assert_eq!(filter_path("/incomes", &filter), "/incomes/filter?endDate=2024-12-31");
}

// =============================================================
// Sort and dashboard paths
// =============================================================

#[test]
fn sort_path_includes_field_and_order() {
    assert_eq!(sort_path("/expenses", "amount", SortOrder::Desc), "/expenses/sort?sortBy=amount&order=desc");
    assert_eq!(sort_path("/incomes", "date", SortOrder::Asc), "/incomes/sort?sortBy=date&order=asc");
}

#[test]
fn pnl_range_path_includes_both_dates() {
    assert_eq!(
        pnl_range_path("2024-01-01", "2024-06-30"),
        "/dashboard/pnl/range?startDate=2024-01-01&endDate=2024-06-30"
    );
}
