/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Balance color:
/// \>= 0 → green (surplus)
/// \< 0 → red (deficit)
pub fn color_for_balance(balance: f64) -> &'static str {
    if balance >= 0.0 { GREEN } else { RED }
}
