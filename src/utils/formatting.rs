//! Formatting utilities used for terminal output and chart annotations.

/// Balance annotation label: rounded to 2 decimals, trailing zeros trimmed
/// down to one decimal place, explicit "+" only for positive values.
/// Examples: 2.5 -> "+2.5h", -2.0 -> "-2.0h", 0.0 -> "0.0h".
pub fn balance_label(balance: f64) -> String {
    let rounded = (balance * 100.0).round() / 100.0;

    let mut digits = format!("{:.2}", rounded.abs());
    while digits.ends_with('0') && !digits.ends_with(".0") {
        digits.pop();
    }

    let sign = if rounded > 0.0 {
        "+"
    } else if rounded < 0.0 {
        "-"
    } else {
        ""
    };

    format!("{}{}h", sign, digits)
}

/// Render an hour count as "HHh MMm" (sign first when negative),
/// used in the summary table for per-day worked time.
pub fn hours2readable(hours: f64) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let sign = if total_minutes < 0 { "-" } else { "" };
    let m = total_minutes.abs();
    format!("{}{:02}h {:02}m", sign, m / 60, m % 60)
}
