//! Data source adapter: reads the timesheet as a raw row/column grid.
//!
//! The provider is a CSV export of the tracking spreadsheet. How the export
//! gets onto disk is the caller's business; `sheet_export_url` helps scripting
//! the download from a Google Sheets edit link.

use std::path::Path;

use crate::errors::{AppError, AppResult};

/// One sheet row as delivered by the source. Empty cells are `None`.
#[derive(Debug, Clone)]
pub struct RawRow {
    pub cells: Vec<Option<String>>,
}

impl RawRow {
    /// True when every cell is empty (CSV exports often carry blank trailing rows).
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }
}

/// The fetched grid: a header row plus data rows, nothing parsed yet.
#[derive(Debug, Clone)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Rewrite a Google Sheets edit URL into its CSV-export form.
/// Non-Google locations are returned unchanged.
pub fn sheet_export_url(location: &str) -> String {
    location.replace("/edit#gid=", "/export?format=csv&gid=")
}

/// One-shot read of the sheet export. Fails with a retrieval error when the
/// file is unreachable or has no header row; ragged rows are tolerated.
pub fn read_sheet(path: &str) -> AppResult<RawTable> {
    if !Path::new(path).exists() {
        return Err(AppError::Retrieval(format!(
            "cannot read sheet export: {}",
            path
        )));
    }

    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.is_empty() {
        return Err(AppError::Retrieval(format!("sheet has no header row: {}", path)));
    }

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let cells = (0..headers.len())
            .map(|i| {
                record
                    .get(i)
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(str::to_string)
            })
            .collect();
        rows.push(RawRow { cells });
    }

    Ok(RawTable { headers, rows })
}
