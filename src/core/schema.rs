//! Schema normalizer: classifies the sheet's columns by header label and
//! turns the raw grid into a date-indexed table of paired session times.

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::source::RawTable;
use crate::utils::date::parse_sheet_date;
use crate::utils::time::parse_clock;

/// Column classification of one sheet layout: where the date lives, the
/// start/end columns in left-to-right order, and the optional override column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub date: usize,
    pub starts: Vec<usize>,
    pub ends: Vec<usize>,
    pub override_col: Option<usize>,
}

impl ColumnLayout {
    /// Classify headers with a case- and diacritic-insensitive prefix match
    /// against the configured label synonyms. A date column is mandatory;
    /// everything the profile does not recognize is ignored.
    pub fn classify(headers: &[String], cfg: &Config) -> AppResult<Self> {
        let date_re = label_matcher(&cfg.date_labels)?;
        let start_re = label_matcher(&cfg.start_labels)?;
        let end_re = label_matcher(&cfg.end_labels)?;
        let override_re = label_matcher(&cfg.override_labels)?;

        let mut date = None;
        let mut starts = Vec::new();
        let mut ends = Vec::new();
        let mut override_col = None;

        for (i, header) in headers.iter().enumerate() {
            let key = fold_diacritics(&header.to_lowercase());

            if date.is_none() && date_re.is_match(&key) {
                date = Some(i);
            } else if override_col.is_none() && override_re.is_match(&key) {
                override_col = Some(i);
            } else if start_re.is_match(&key) {
                starts.push(i);
            } else if end_re.is_match(&key) {
                ends.push(i);
            }
        }

        let date = date.ok_or_else(|| {
            AppError::Retrieval(format!(
                "no date column found among headers: {}",
                headers.join(", ")
            ))
        })?;

        Ok(Self {
            date,
            starts,
            ends,
            override_col,
        })
    }

    /// Number of positionally matched session pairs. Trailing unmatched
    /// start or end columns never form a pair.
    pub fn pair_count(&self) -> usize {
        self.starts.len().min(self.ends.len())
    }
}

/// One normalized day: clock times column-renumbered 0..N-1 so that
/// `starts[i]` pairs with `ends[i]`, plus the raw row's fill level.
#[derive(Debug, Clone)]
pub struct DayRow {
    pub date: NaiveDate,
    pub starts: Vec<Option<NaiveTime>>,
    pub ends: Vec<Option<NaiveTime>>,
    pub target_override: Option<f64>,
    /// Non-empty cells in the original row, date column excluded.
    pub filled_cells: usize,
}

/// The normalized sheet: rows sorted by date ascending, session columns
/// aligned. Both sides always have the layout's full column count; a missing
/// start simply yields no duration for that pair.
#[derive(Debug, Clone)]
pub struct SessionTable {
    pub days: Vec<DayRow>,
    pub pair_count: usize,
}

/// Parse every raw row against the classified layout. Unparseable dates are
/// fatal (the date is the primary key); unparseable or empty time and override
/// cells degrade to "missing". Fully blank rows are dropped.
pub fn normalize(table: &RawTable, layout: &ColumnLayout, cfg: &Config) -> AppResult<SessionTable> {
    let mut days = Vec::new();

    for (row_no, row) in table.rows.iter().enumerate() {
        if row.is_blank() {
            continue;
        }

        let cell = |i: usize| row.cells.get(i).and_then(|c| c.as_deref());

        let date_cell = cell(layout.date).ok_or_else(|| {
            AppError::InvalidDate(format!("row {}: empty date cell", row_no + 2))
        })?;
        let date = parse_sheet_date(date_cell, cfg.date_order)
            .ok_or_else(|| AppError::InvalidDate(date_cell.to_string()))?;

        let starts = layout
            .starts
            .iter()
            .map(|&i| cell(i).and_then(parse_clock))
            .collect();
        let ends = layout
            .ends
            .iter()
            .map(|&i| cell(i).and_then(parse_clock))
            .collect();

        let target_override = layout
            .override_col
            .and_then(|i| cell(i))
            .and_then(parse_override);

        let filled_cells = row
            .cells
            .iter()
            .enumerate()
            .filter(|(i, c)| *i != layout.date && c.is_some())
            .count();

        days.push(DayRow {
            date,
            starts,
            ends,
            target_override,
            filled_cells,
        });
    }

    days.sort_by_key(|d| d.date);

    Ok(SessionTable {
        days,
        pair_count: layout.pair_count(),
    })
}

/// Override cells accept both "7.5" and the comma-decimal "7,5".
fn parse_override(s: &str) -> Option<f64> {
    s.trim().replace(',', ".").parse::<f64>().ok()
}

fn label_matcher(synonyms: &[String]) -> AppResult<Regex> {
    let alternation = synonyms
        .iter()
        .map(|s| regex::escape(&fold_diacritics(&s.to_lowercase())))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!("^(?:{})", alternation))
        .map_err(|e| AppError::Config(format!("bad header synonym list: {}", e)))
}

/// Strip the Latin diacritics that show up in the supported header locales,
/// so "Início" and "Inicio" classify identically.
fn fold_diacritics(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'ä' => 'a',
            'é' | 'è' | 'ê' | 'ë' => 'e',
            'í' | 'ì' | 'î' | 'ï' => 'i',
            'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
            'ú' | 'ù' | 'û' | 'ü' => 'u',
            'ç' => 'c',
            'Á' | 'À' | 'Â' | 'Ã' | 'Ä' => 'A',
            'É' | 'È' | 'Ê' | 'Ë' => 'E',
            'Í' | 'Ì' | 'Î' | 'Ï' => 'I',
            'Ó' | 'Ò' | 'Ô' | 'Õ' | 'Ö' => 'O',
            'Ú' | 'Ù' | 'Û' | 'Ü' => 'U',
            'Ç' => 'C',
            _ => c,
        })
        .collect()
}
