//! Amount formatting per currency.

use crate::domain::foundation::Currency;

/// Formats an amount rounded to whole units with the currency's symbol and
/// digit grouping: `₹1,70,000`, `$170,000`, `€170,000`.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    let rounded = if amount.is_finite() { amount.round() } else { 0.0 };
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let grouped = match currency {
        Currency::Inr => group_indian(&digits),
        Currency::Usd | Currency::Eur => group_thousands(&digits),
    };

    format!(
        "{}{}{}",
        if negative { "-" } else { "" },
        currency.symbol(),
        grouped
    )
}

/// Formats a percentage with one decimal.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}

fn group_thousands(digits: &str) -> String {
    join_groups(split_from_right(digits, 3))
}

/// Last three digits, then pairs: 12,34,56,789.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = split_from_right(head, 2);
    groups.push(tail);
    join_groups(groups)
}

fn split_from_right(digits: &str, size: usize) -> Vec<&str> {
    let mut groups = Vec::new();
    let mut end = digits.len();
    while end > size {
        groups.push(&digits[end - size..end]);
        end -= size;
    }
    groups.push(&digits[..end]);
    groups.reverse();
    groups
}

fn join_groups(groups: Vec<&str>) -> String {
    groups.join(",")
}
