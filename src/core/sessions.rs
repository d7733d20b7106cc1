//! Duration aggregator: per-day worked time from the paired session columns.

use chrono::Duration;

use crate::core::schema::DayRow;

/// Sum of `end - start` over every pair where both sides are present.
/// Missing pairs contribute zero. The difference is signed: an overnight
/// shift logged without a day rollover comes out negative and is passed
/// through unmodified.
pub fn worked_duration(day: &DayRow, pair_count: usize) -> Duration {
    let pairs = pair_count
        .min(day.starts.len())
        .min(day.ends.len());

    let mut total = Duration::zero();
    for i in 0..pairs {
        if let (Some(start), Some(end)) = (day.starts[i], day.ends[i]) {
            total = total + (end - start);
        }
    }
    total
}
