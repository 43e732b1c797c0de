//! Number formatting for the rendered dashboard and CSV exports.

/// Groups digits in threes: `1343600` becomes `1,343,600`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-rupee amount with digit grouping, rounded to the nearest unit.
pub fn format_amount(value: f64) -> String {
    let rounded = value.round();
    if rounded < 0.0 {
        format!("-{}", format_thousands((-rounded) as u64))
    } else {
        format_thousands(rounded as u64)
    }
}

/// Per-area rate, two decimals.
pub fn format_rate(value: f64) -> String {
    format!("{:.2}", value)
}

pub fn format_signed(value: i64) -> String {
    if value > 0 {
        format!("+{}", value)
    } else {
        value.to_string()
    }
}
