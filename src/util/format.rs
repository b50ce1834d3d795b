//! Display formatting for amounts and dates.
//!
//! DESIGN
//! ======
//! The backend works in INR and ISO 8601 dates. Amounts render with en-IN
//! digit grouping (the last three digits form one group, the rest pair
//! off), dates render as `dd Mon, yyyy`. Malformed inputs pass through
//! unchanged rather than erroring, since these are pure display paths.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an amount as INR currency with en-IN grouping, e.g.
/// `₹12,34,567.89`.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹0.00".to_owned();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let grouped = group_indian(int_part);
    if amount < 0.0 {
        format!("-₹{grouped}.{frac_part}")
    } else {
        format!("₹{grouped}.{frac_part}")
    }
}

/// en-IN integer grouping: last group of three, remaining groups of two.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        pairs.push(pair);
        rest = front;
    }
    pairs.push(rest);
    pairs.reverse();
    format!("{},{tail}", pairs.join(","))
}

/// Render an ISO `YYYY-MM-DD` date as `dd Mon, yyyy` for tables and cards.
/// Malformed input is returned unchanged.
pub fn format_display_date(value: &str) -> String {
    let mut parts = value.splitn(3, '-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return value.to_owned();
    };
    let (Ok(month_num), Ok(day_num)) = (month.parse::<usize>(), day.parse::<u32>()) else {
        return value.to_owned();
    };
    if year.len() != 4 || year.parse::<u32>().is_err() || !(1..=12).contains(&month_num) || !(1..=31).contains(&day_num) {
        return value.to_owned();
    }
    format!("{day_num:02} {}, {year}", MONTHS[month_num - 1])
}

/// Truncate a datetime string to its `YYYY-MM-DD` date part for API query
/// parameters.
pub fn date_for_api(value: &str) -> &str {
    value.split('T').next().unwrap_or(value)
}
