use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};

/// Format used everywhere dates are stored or printed.
pub const DATE_FMT: &str = "%Y-%m-%d";

/// Formats accepted when reading dates written by other tools (spreadsheet
/// exports, hand-edited files). Tried in order after `DATE_FMT`.
const LENIENT_DATE_FMTS: [&str; 3] = ["%Y/%m/%d", "%d/%m/%Y", "%d-%m-%Y"];
const LENIENT_DATETIME_FMTS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Strict `YYYY-MM-DD` parsing (CLI input).
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FMT).ok()
}

/// Parse an optional CLI date, defaulting to today.
pub fn parse_or_today(s: Option<&str>) -> AppResult<NaiveDate> {
    match s {
        None => Ok(today()),
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
    }
}

/// Best-effort parsing of a stored date. Empty or unrecognised input yields `None`;
/// any time-of-day component is dropped.
pub fn parse_lenient(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(d) = parse_date(s) {
        return Some(d);
    }

    for fmt in LENIENT_DATETIME_FMTS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    LENIENT_DATE_FMTS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// `YYYY-MM-DD`, or an empty string for `None`.
pub fn format_opt(d: Option<NaiveDate>) -> String {
    d.map(|d| d.format(DATE_FMT).to_string()).unwrap_or_default()
}
