use chrono::NaiveDate;

use crate::config::DateOrder;

const DAY_FIRST_FORMATS: &[&str] = &["%d/%m/%Y", "%d/%m/%y", "%d-%m-%Y", "%d.%m.%Y"];
const MONTH_FIRST_FORMATS: &[&str] = &["%m/%d/%Y", "%m/%d/%y", "%m-%d-%Y"];

/// Parse a sheet date cell. The ambiguous "xx/yy" forms follow the configured
/// day/month order; ISO "YYYY-MM-DD" is always accepted since it is unambiguous.
pub fn parse_sheet_date(s: &str, order: DateOrder) -> Option<NaiveDate> {
    let s = s.trim();

    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }

    let formats = match order {
        DateOrder::DayFirst => DAY_FIRST_FORMATS,
        DateOrder::MonthFirst => MONTH_FIRST_FORMATS,
    };

    formats
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(s, f).ok())
}

/// 3-letter English weekday abbreviation, as used on the chart's x axis.
pub fn weekday_abbrev(date: NaiveDate) -> &'static str {
    use chrono::Datelike;
    match date.weekday() {
        chrono::Weekday::Mon => "Mon",
        chrono::Weekday::Tue => "Tue",
        chrono::Weekday::Wed => "Wed",
        chrono::Weekday::Thu => "Thu",
        chrono::Weekday::Fri => "Fri",
        chrono::Weekday::Sat => "Sat",
        chrono::Weekday::Sun => "Sun",
    }
}
