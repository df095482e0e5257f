//! Display formatting helpers

use chrono::{DateTime, Utc};

/// Group an integer with spaces every three digits, Hungarian style.
///
/// 45000000 becomes "45 000 000".
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    let first_group = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - first_group) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// Listing price as displayed: grouped digits plus currency suffix, or the
/// "not given" placeholder for a missing price.
pub fn format_price(price: i64) -> String {
    if price <= 0 {
        return "nincs megadva".to_string();
    }
    format!("{} Ft", group_thousands(price))
}

/// Submission timestamp in the local display style used across the app
pub fn format_submitted_at(ts: DateTime<Utc>) -> String {
    ts.format("%Y. %m. %d. %H:%M").to_string()
}

/// Date-only form used in export file names
pub fn format_date_for_filename(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d").to_string()
}
