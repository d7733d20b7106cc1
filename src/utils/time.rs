//! Time utilities: parsing clock cells, duration-to-hours conversion.

use chrono::{Duration, NaiveTime};

/// Parse a clock-in/out cell. Sheets export either "HH:MM" or "HH:MM:SS".
pub fn parse_clock(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Exact seconds-based conversion, no calendar approximations.
pub fn duration_hours(d: Duration) -> f64 {
    d.num_seconds() as f64 / 3600.0
}

pub fn hours_to_seconds(hours: f64) -> f64 {
    hours * 3600.0
}
