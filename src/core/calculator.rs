//! Customer count and conversion rate.

/// Customers seen during the day: closing count minus morning count.
///
/// Inconsistent counts (closing below morning) give a negative number,
/// which is passed through as is. Saturates at the i64 bounds.
pub fn customers(closing: i64, morning: i64) -> i64 {
    closing.saturating_sub(morning)
}

/// Transactions over customers as a percentage with two decimals, e.g. `"60.00%"`.
///
/// Returns `"0.00%"` when there are no customers (zero or negative).
pub fn conversion_rate(transactions: i64, customers: i64) -> String {
    if customers > 0 {
        format!("{:.2}%", transactions as f64 / customers as f64 * 100.0)
    } else {
        "0.00%".to_string()
    }
}
