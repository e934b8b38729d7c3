// Utility functions: INR currency, readable dates, rental day counts
use chrono::NaiveDate;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Formats `amount` as rupees with Indian digit grouping, e.g. `₹12,34,567.5`.
/// At most three fraction digits are kept.
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return "₹NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "₹∞".into() } else { "₹-∞".into() };
    }

    let thousandths = (amount.abs() * 1000.0).round() as u128;
    let whole = thousandths / 1000;
    let fraction = thousandths % 1000;
    let sign = if amount < 0.0 && thousandths != 0 { "-" } else { "" };

    let mut out = format!("₹{}{}", sign, group_indian(whole));
    if fraction != 0 {
        let digits = format!("{:03}", fraction);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Last three digits, then groups of two: 1234567 -> 12,34,567.
fn group_indian(n: u128) -> String {
    let digits = n.to_string();
    if digits.len() <= 3 {
        return digits;
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// `2024-01-15` -> `Mon, 15 Jan 2024`. `None` for anything unparsable.
pub fn format_date(date_str: &str) -> Option<String> {
    NaiveDate::parse_from_str(date_str.trim(), DATE_FORMAT)
        .ok()
        .map(|d| d.format("%a, %-d %b %Y").to_string())
}

/// Whole days between two `YYYY-MM-DD` dates, in either order.
/// Same-day or unparsable input counts as one day.
pub fn calculate_days(start_date: &str, end_date: &str) -> i64 {
    let parse = |s: &str| NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).ok();
    match (parse(start_date), parse(end_date)) {
        (Some(start), Some(end)) => {
            let days = (end - start).num_days().abs();
            if days == 0 { 1 } else { days }
        }
        _ => 1,
    }
}
