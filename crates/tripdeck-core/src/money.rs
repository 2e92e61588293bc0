//! Currency formatting helpers.
//!
//! All generated figures are whole rupees: no fractional units, thousands
//! separated by commas in 3-digit groups.

/// Group an integer amount with comma thousands separators.
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format a whole-rupee amount for display, e.g. `₹12,500`.
pub fn format_inr(amount: u64) -> String {
    format!("\u{20b9}{}", group_thousands(amount))
}
