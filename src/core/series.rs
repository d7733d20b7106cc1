//! Cumulative series builder: the per-day performance table with running
//! worked and target totals over one shared date index.

use chrono::{Duration, NaiveDate};

use crate::config::Config;
use crate::core::schema::SessionTable;
use crate::core::sessions::worked_duration;
use crate::core::target::target_hours;
use crate::utils::time::duration_hours;

/// One day of the performance table, ordered by date ascending.
#[derive(Debug, Clone)]
pub struct PerformanceRecord {
    pub date: NaiveDate,
    pub worked: Duration,
    pub cum_worked_hours: f64,
    pub target_hours: f64,
    pub cum_target_hours: f64,
}

/// Prefix sums for both series over the full date range present in the sheet.
/// Hours conversion happens here and only here (exact seconds / 3600).
pub fn build_series(table: &SessionTable, cfg: &Config) -> Vec<PerformanceRecord> {
    let mut cum_worked = 0.0;
    let mut cum_target = 0.0;

    table
        .days
        .iter()
        .map(|day| {
            let worked = worked_duration(day, table.pair_count);
            let target = target_hours(day.date, day.target_override, cfg.business_day_target_hours);

            cum_worked += duration_hours(worked);
            cum_target += target;

            PerformanceRecord {
                date: day.date,
                worked,
                cum_worked_hours: cum_worked,
                target_hours: target,
                cum_target_hours: cum_target,
            }
        })
        .collect()
}

/// Signed worked-vs-target balance at the last record of the slice.
/// Positive = surplus, negative = deficit.
pub fn balance(records: &[PerformanceRecord]) -> f64 {
    records
        .last()
        .map(|r| r.cum_worked_hours - r.cum_target_hours)
        .unwrap_or(0.0)
}
