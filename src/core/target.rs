//! Target calculator: business-day default with per-day overrides.

use chrono::{Datelike, NaiveDate, Weekday};

/// Mon-Fri get the default target, weekends zero. A non-missing override
/// replaces the default unconditionally, whatever the weekday and whatever
/// the value (a holiday can zero-out a Wednesday, a weekend can get hours).
pub fn target_hours(date: NaiveDate, override_value: Option<f64>, default_hours: f64) -> f64 {
    if let Some(v) = override_value {
        return v;
    }

    match date.weekday() {
        Weekday::Sat | Weekday::Sun => 0.0,
        _ => default_hours,
    }
}
