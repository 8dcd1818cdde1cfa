//! Display helpers for numbers and dates on the console screens.

use shared::models::Timestamp;

/// `1234.5` → `"$1,234.50"`; negatives keep their sign in front.
pub fn money(amount: f64) -> String {
    if !amount.is_finite() {
        return "-".to_string();
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = format!("{:.2}", amount.abs());
    let (whole, fraction) = cents.split_once('.').unwrap_or((&cents, "00"));
    format!("{sign}${}.{fraction}", group_thousands(whole))
}

/// `12345` → `"12,345"`.
pub fn count(value: u64) -> String {
    group_thousands(&value.to_string())
}

pub fn percent(value: f64) -> String {
    format!("{value:.1}%")
}

pub fn date(timestamp: Option<&Timestamp>) -> String {
    timestamp.map_or_else(|| "-".to_string(), Timestamp::date_label)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
