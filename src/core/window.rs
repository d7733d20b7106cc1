//! Window selector: the trailing week ending at the last filled-in row.

use crate::core::schema::SessionTable;
use crate::core::series::PerformanceRecord;
use crate::errors::{AppError, AppResult};

/// Restrict the series to the last `window_days` records up to and including
/// the most recent day whose raw row has at least `threshold` non-empty cells.
/// Rows below the threshold are treated as unfilled placeholders (sheets
/// usually carry pre-dated future rows) and never end the window.
///
/// Returns `InsufficientData` when no row reaches the threshold, so callers
/// can report "no data available" instead of slicing into nothing.
pub fn select_window<'a>(
    series: &'a [PerformanceRecord],
    table: &SessionTable,
    window_days: usize,
    threshold: usize,
) -> AppResult<&'a [PerformanceRecord]> {
    debug_assert_eq!(series.len(), table.days.len());

    let last_complete = table
        .days
        .iter()
        .rposition(|d| d.filled_cells >= threshold)
        .ok_or(AppError::InsufficientData)?;

    let start = (last_complete + 1).saturating_sub(window_days);
    Ok(&series[start..=last_complete])
}
