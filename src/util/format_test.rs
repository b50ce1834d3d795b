use super::*;

// =============================================================
// format_inr
// =============================================================

#[test]
fn inr_formats_zero() {
    assert_eq!(format_inr(0.0), "₹0.00");
}

#[test]
fn inr_formats_small_amounts_without_grouping() {
    assert_eq!(format_inr(1.5), "₹1.50");
    assert_eq!(format_inr(999.0), "₹999.00");
}

#[test]
fn inr_groups_last_three_then_pairs() {
    assert_eq!(format_inr(1234.0), "₹1,234.00");
    assert_eq!(format_inr(12345.0), "₹12,345.00");
    assert_eq!(format_inr(123456.0), "₹1,23,456.00");
    assert_eq!(format_inr(1234567.89), "₹12,34,567.89");
    assert_eq!(format_inr(123456789.0), "₹12,34,56,789.00");
}

#[test]
fn inr_rounds_to_two_decimals() {
    assert_eq!(format_inr(99999.999), "₹1,00,000.00");
}

#[test]
fn inr_negative_sign_precedes_symbol() {
    assert_eq!(format_inr(-1234.5), "-₹1,234.50");
}

#[test]
fn inr_non_finite_renders_as_zero() {
    assert_eq!(format_inr(f64::NAN), "₹0.00");
    assert_eq!(format_inr(f64::INFINITY), "₹0.00");
}

// =============================================================
// format_display_date
// =============================================================

#[test]
fn display_date_renders_day_month_year() {
    assert_eq!(format_display_date("2024-03-15"), "15 Mar, 2024");
    assert_eq!(format_display_date("2024-01-05"), "05 Jan, 2024");
    assert_eq!(format_display_date("2023-12-31"), "31 Dec, 2023");
}

#[test]
fn display_date_passes_malformed_input_through() {
    assert_eq!(format_display_date(""), "");
    assert_eq!(format_display_date("not a date"), "not a date");
    assert_eq!(format_display_date("2024-13-01"), "2024-13-01");
    assert_eq!(format_display_date("24-01-01"), "24-01-01");
}

// =============================================================
// date_for_api
// =============================================================

#[test]
fn date_for_api_truncates_datetime() {
    assert_eq!(date_for_api("2024-03-15T10:30:00Z"), "2024-03-15");
}

#[test]
fn date_for_api_keeps_plain_dates() {
    assert_eq!(date_for_api("2024-03-15"), "2024-03-15");
}
