//! Pipeline front door: one call from sheet export to performance series,
//! so the CLI handlers stay thin.

use crate::config::Config;
use crate::core::schema::{self, ColumnLayout, SessionTable};
use crate::core::series::{self, PerformanceRecord};
use crate::errors::AppResult;
use crate::source;

pub struct Pipeline;

/// Everything the reporting commands need: the normalized table (for the
/// window selector's fill counts) and the full cumulative series.
pub struct PipelineOutput {
    pub table: SessionTable,
    pub series: Vec<PerformanceRecord>,
}

impl Pipeline {
    /// read -> classify -> normalize -> aggregate/cumulate, one linear pass.
    pub fn from_sheet(path: &str, cfg: &Config) -> AppResult<PipelineOutput> {
        let raw = source::read_sheet(path)?;
        let layout = ColumnLayout::classify(&raw.headers, cfg)?;
        let table = schema::normalize(&raw, &layout, cfg)?;
        let series = series::build_series(&table, cfg);

        Ok(PipelineOutput { table, series })
    }
}
